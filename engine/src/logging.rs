/// Installs `env_logger`, logging at `info` unless `RUST_LOG` says otherwise.
/// Calling it again is harmless.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already installed");
    }
}
