//! Row types and per-endpoint view types.
//!
//! Each endpoint serializes a fixed shape; relations are nested explicitly
//! rather than toggled off a generic serializer, so back-references never
//! appear (a signup under a camper carries its activity but not the camper
//! again).

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Camper {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Signup {
    pub id: i64,
    pub time: String,
    pub camper_id: i64,
    pub activity_id: i64,
}

/// `GET /campers` element and `PATCH /campers/:id` response: no signups.
#[derive(Debug, Serialize)]
pub struct CamperSummary {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<Camper> for CamperSummary {
    fn from(c: Camper) -> Self {
        CamperSummary {
            id: c.id,
            name: c.name,
            age: c.age,
        }
    }
}

/// `GET /campers/:id` and `POST /campers` response: camper with its signups.
#[derive(Debug, Serialize)]
pub struct CamperDetail {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<SignupWithActivity>,
}

impl CamperDetail {
    pub fn new(camper: Camper, signups: Vec<SignupWithActivity>) -> Self {
        CamperDetail {
            id: camper.id,
            name: camper.name,
            age: camper.age,
            signups,
        }
    }
}

/// Signup nested under a camper: carries the activity, not the camper.
#[derive(Debug, Serialize)]
pub struct SignupWithActivity {
    pub id: i64,
    pub time: String,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: Activity,
}

/// `POST /signups` response: both referenced rows nested.
#[derive(Debug, Serialize)]
pub struct SignupDetail {
    pub id: i64,
    pub time: String,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper: CamperSummary,
    pub activity: Activity,
}

impl SignupDetail {
    pub fn new(signup: Signup, camper: Camper, activity: Activity) -> Self {
        SignupDetail {
            id: signup.id,
            time: signup.time,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
            camper: camper.into(),
            activity,
        }
    }
}
