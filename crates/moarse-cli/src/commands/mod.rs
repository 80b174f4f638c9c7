pub mod config_ops;
pub mod replay_ops;
pub mod transcode_ops;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;
