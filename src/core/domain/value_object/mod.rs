mod base_url;
mod probe_password;
mod probe_username;

pub use base_url::BaseUrl;
pub use probe_password::ProbePassword;
pub use probe_username::ProbeUsername;
