use serde::Deserialize;

use restockr_auth::Role;
use restockr_store::Location;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    #[serde(rename = "locationId")]
    pub location_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderLineRequest {
    pub sku: String,
    /// Absent or non-numeric counts are treated as zero, matching the
    /// forgiving portal form.
    #[serde(rename = "onHand")]
    pub on_hand: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub lines: Vec<UpdateOrderLineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct VoiceOrderRequest {
    #[serde(rename = "locationId")]
    pub location_id: Option<String>,
    pub transcript: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitPriceRequest {
    pub sku: String,
    #[serde(rename = "priceCents")]
    pub price_cents: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreateInviteRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct InviteQuery {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct OnboardRequest {
    pub token: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BudChatRequest {
    pub role: Option<Role>,
    #[serde(rename = "locationName")]
    pub location_name: Option<String>,
    pub question: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MintsyLogRequest {
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub payload: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct LedgerQuery {
    pub limit: Option<String>,
}

// -------------------------
// Response mapping helpers
// -------------------------

pub fn location_to_json(location: &Location) -> serde_json::Value {
    serde_json::json!({
        "id": location.slug,
        "name": location.name,
        "city": location.city,
        "region": location.region,
    })
}
