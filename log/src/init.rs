use elog::LevelFilter;

pub const FILE_NAME: &str = "sink.log";

// 未知的级别按info处理
pub fn level_filter(l: &str) -> LevelFilter {
    match l {
        "trace" | "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" | "fatal" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

#[cfg(feature = "enable-log")]
pub fn init(path: &str, l: &str) -> std::io::Result<()> {
    use log4rs::{
        append::file::FileAppender,
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };
    use std::io::{Error, ErrorKind};

    let file = std::path::Path::new(path).join(FILE_NAME);
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("[sink] {d} - {l} - {t} - {m}{n}")))
        .build(file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level_filter(l)))
        .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("log config invalid:{:?}", e)))?;

    let _handle = log4rs::init_config(config)
        .map_err(|e| Error::new(ErrorKind::InvalidData, format!("init log failed:{:?}", e)))?;

    Ok(())
}
