pub mod cdp_client;
pub mod page_client;
pub mod retry;

pub use cdp_client::CdpClient;
pub use page_client::{Interaction, PageClient};
pub use retry::retry_on_stale;
