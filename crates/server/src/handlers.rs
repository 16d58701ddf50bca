//! Warrior CRUD and derived-attribute handlers.
//!
//! Path ids are read like a base-10 `parseInt`: leading whitespace, an
//! optional sign, then the leading digits (`"12abc"` is id 12). A segment with
//! no leading digits is treated as an id that does not exist.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};
use game_core::{Warrior, WarriorDraft, WarriorId, WarriorInfo, WarriorPatch};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// Query string accepted by the info endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct InfoQuery {
    /// Purchase cost checked against the warrior's money (default: 0).
    pub cost: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowHealthResponse {
    pub is_low_on_health: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityResponse {
    pub can_afford_purchase: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    pub is_special_ability_eligible: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalDamageResponse {
    pub total_damage: f64,
}

fn parse_id(raw: &str) -> ApiResult<WarriorId> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return Err(ApiError::NotFound);
    }

    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return Err(ApiError::NotFound);
    }

    trimmed[..sign_len + digits]
        .parse::<i64>()
        .map(WarriorId)
        .map_err(|_| ApiError::NotFound)
}

/// Decode an update body; an empty body names no fields.
fn parse_patch(body: &[u8]) -> ApiResult<WarriorPatch> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(WarriorPatch::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid update payload: {e}")))
}

fn parse_cost(raw: &str) -> ApiResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ApiError::InvalidRequest(format!("Invalid purchase cost: {raw}")))
}

/// List the names of all warriors
pub async fn list_names_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.service.names()?))
}

/// List all warriors
pub async fn list_warriors_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Warrior>>> {
    Ok(Json(state.service.list()?))
}

/// Create a new warrior
pub async fn create_warrior_handler(
    State(state): State<AppState>,
    payload: Result<Json<WarriorDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Warrior>)> {
    let Json(draft) = payload?;
    let warrior = state.service.create(draft)?;
    Ok((StatusCode::CREATED, Json(warrior)))
}

/// Get a specific warrior
pub async fn get_warrior_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Warrior>> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.get(id)?))
}

/// Merge the supplied fields onto a warrior
pub async fn update_warrior_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Warrior>> {
    let id = parse_id(&id)?;
    let patch = parse_patch(&body)?;
    Ok(Json(state.service.update(id, patch)?))
}

/// Delete a warrior, returning the removed record
pub async fn delete_warrior_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Warrior>> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.delete(id)?))
}

pub async fn low_health_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<LowHealthResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(LowHealthResponse {
        is_low_on_health: state.service.is_low_on_health(id)?,
    }))
}

pub async fn affordability_handler(
    State(state): State<AppState>,
    Path((id, cost)): Path<(String, String)>,
) -> ApiResult<Json<AffordabilityResponse>> {
    let cost = parse_cost(&cost)?;
    let id = parse_id(&id)?;
    Ok(Json(AffordabilityResponse {
        can_afford_purchase: state.service.can_afford_purchase(id, cost)?,
    }))
}

pub async fn eligibility_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<EligibilityResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(EligibilityResponse {
        is_special_ability_eligible: state.service.is_special_ability_eligible(id)?,
    }))
}

/// Roll damage; each request rolls its own critical check
pub async fn total_damage_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TotalDamageResponse>> {
    let id = parse_id(&id)?;
    Ok(Json(TotalDamageResponse {
        total_damage: state.service.total_damage(id)?,
    }))
}

/// Identity and every derived attribute in one response
pub async fn info_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<InfoQuery>, QueryRejection>,
) -> ApiResult<Json<WarriorInfo>> {
    let Query(query) = query?;
    let id = parse_id(&id)?;
    Ok(Json(state.service.info(id, query.cost.unwrap_or_default())?))
}

/// Create warrior router
pub fn warrior_routes() -> Router<AppState> {
    Router::new()
        .route("/warriors/names", get(list_names_handler))
        .route(
            "/warriors",
            get(list_warriors_handler).post(create_warrior_handler),
        )
        .route(
            "/warriors/{id}",
            get(get_warrior_handler)
                .put(update_warrior_handler)
                .delete(delete_warrior_handler),
        )
        .route("/warriors/{id}/isLowOnHealth", get(low_health_handler))
        .route(
            "/warriors/{id}/canAffordPurchase/{cost}",
            get(affordability_handler),
        )
        .route(
            "/warriors/{id}/isSpecialAbilityEligible",
            get(eligibility_handler),
        )
        .route(
            "/warriors/{id}/calculateTotalDamage",
            get(total_damage_handler),
        )
        .route("/warriors/{id}/info", get(info_handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_id_is_not_found() {
        assert!(matches!(parse_id("abc"), Err(ApiError::NotFound)));
        assert!(matches!(parse_id(""), Err(ApiError::NotFound)));
        assert!(matches!(parse_id("-"), Err(ApiError::NotFound)));
        assert!(matches!(parse_id("--3"), Err(ApiError::NotFound)));
        assert!(matches!(parse_id("99999999999999999999"), Err(ApiError::NotFound)));
        assert_eq!(parse_id("42").unwrap(), WarriorId(42));
        assert_eq!(parse_id("-3").unwrap(), WarriorId(-3));
        assert_eq!(parse_id("+7").unwrap(), WarriorId(7));
    }

    #[test]
    fn id_reads_leading_digits() {
        assert_eq!(parse_id("1abc").unwrap(), WarriorId(1));
        assert_eq!(parse_id("1.5").unwrap(), WarriorId(1));
        assert_eq!(parse_id(" 12 ").unwrap(), WarriorId(12));
    }

    #[test]
    fn empty_update_body_names_no_fields() {
        assert_eq!(parse_patch(b"").unwrap(), WarriorPatch::default());
        assert_eq!(parse_patch(b"  \n").unwrap(), WarriorPatch::default());
        assert_eq!(parse_patch(b"{\"health\": 5}").unwrap().health, Some(5));
        assert!(matches!(parse_patch(b"{oops"), Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn cost_accepts_decimals_and_rejects_text() {
        assert_eq!(parse_cost("12.5").unwrap(), 12.5);
        assert_eq!(parse_cost("-1").unwrap(), -1.0);
        assert!(matches!(parse_cost("cheap"), Err(ApiError::InvalidRequest(_))));
    }
}
