/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    /// Hops the engine's default redirect policy follows before failing.
    pub const MAX_REDIRECTS: usize = 10;
    pub const USER_AGENT: &'static str = concat!("fastchain/", env!("CARGO_PKG_VERSION"));
}
