pub const ZIF_API_HOST: &str = "127.0.0.1:8080";
pub const ZIF_API_HTTPS: bool = false;

// the node only exposes the first page to the local UI for now
pub const ZIF_POPULAR_PAGE: u32 = 0;

pub const JSON_CONTENT_TYPE: &str = "application/json";
