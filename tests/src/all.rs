mod byte_sink;
mod heap;
mod logger;
mod options;
mod sink_props;
mod text_sink;
