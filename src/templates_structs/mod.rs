// Template context structures for Askama templates.

use actix_session::Session;

use crate::config::SiteInfo;
use crate::csrf;

mod opinion;

pub use opinion::*;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.csrf_token`.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, site: &SiteInfo) -> Self {
        Self {
            app_name: site.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}
