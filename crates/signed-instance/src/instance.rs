//! Application instance claims
//!
//! The default claims schema carried in the payload of a signed instance.
//! Deployments with a different payload shape decode into their own type
//! through [`Verifier::verify_and_decode_as`](crate::Verifier::verify_and_decode_as).

use miniserde::Deserialize;

/// Permission value the platform assigns to the site owner
pub const OWNER_PERMISSION: &str = "OWNER";

/// Decoded application instance
///
/// Unknown payload fields are ignored. Only `instanceId` is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppInstance {
    /// Unique identifier of the app installation on a site
    #[serde(rename = "instanceId")]
    pub instance_id: String,

    /// Time the instance was signed, as issued by the platform (ISO 8601)
    #[serde(rename = "signDate")]
    pub sign_date: Option<String>,

    /// Identifier of the logged-in user, if any
    pub uid: Option<String>,

    /// Permissions of the current user (e.g. `OWNER`)
    pub permissions: Option<String>,

    /// Client address as seen by the platform
    #[serde(rename = "ipAndPort")]
    pub ip_and_port: Option<String>,

    /// Premium package the site purchased, if any
    #[serde(rename = "vendorProductId")]
    pub vendor_product_id: Option<String>,

    #[serde(rename = "demoMode")]
    pub demo_mode: Option<bool>,

    /// Anonymous visitor identifier
    #[serde(rename = "aid")]
    pub anonymous_id: Option<String>,

    /// Instance this one was copied from when a site is duplicated
    #[serde(rename = "originInstanceId")]
    pub origin_instance_id: Option<String>,

    #[serde(rename = "siteOwnerId")]
    pub site_owner_id: Option<String>,

    #[serde(rename = "siteMemberId")]
    pub site_member_id: Option<String>,
}

impl AppInstance {
    /// Whether the current user owns the site
    pub fn is_owner(&self) -> bool {
        self.permissions.as_deref() == Some(OWNER_PERMISSION)
    }

    /// Whether the instance runs in the editor's demo mode
    pub fn is_demo(&self) -> bool {
        self.demo_mode.unwrap_or(false)
    }
}
