//! Nameday calendar endpoint.

use axum::{
    Json,
    extract::Query,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::nameday::nameday_for;
use crate::errors::Error;

/// Query for `GET /api/calendar/nameday`; the date must be `YYYY-MM-DD`.
#[derive(Debug, Deserialize)]
pub struct NamedayQuery {
    pub date: NaiveDate,
}

/// Wire shape of a nameday answer.
#[derive(Debug, Serialize)]
pub struct Nameday {
    pub name: String,
}

/// `GET /api/calendar/nameday?date=2025-12-24`
///
/// 404 when the calendar has no entry for that month and day.
pub async fn nameday(Query(query): Query<NamedayQuery>) -> Result<Json<Nameday>, Error> {
    let name =
        nameday_for(query.date).ok_or_else(|| Error::not_found("nameday", query.date))?;
    Ok(Json(Nameday { name }))
}
