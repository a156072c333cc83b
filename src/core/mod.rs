pub mod chinese;
pub mod compatibility;
pub mod date;
pub mod numerology;
pub mod profile;
pub mod zodiac;

pub use crate::domain::model::{CalcRequest, CalcResponse, CompatibilityResult, Profile, SignRecord};
pub use crate::domain::ports::{AssetStore, ConfigProvider};
pub use crate::utils::error::Result;
