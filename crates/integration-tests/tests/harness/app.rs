//! Repository, service and controller layers of a small match-data API

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use fault_core::{Fault, FaultContext, Info, Kind, ProvideInfo, SubService};
use fault_http::Responder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchData {
    pub id: u32,
    pub home: String,
    pub away: String,
}

impl ProvideInfo for MatchData {
    fn error_info(&self) -> Info {
        Info::new(
            "match",
            vec![
                Info::new("id", self.id),
                Info::new("home", self.home.as_str()),
                Info::new("away", self.away.as_str()),
            ],
        )
    }
}

/// Id the repository fails on with a storage error
pub const BROKEN_ID: u32 = 99;

pub struct Repository;

impl Repository {
    pub fn find(&self, id: u32) -> Result<MatchData, Fault> {
        let op = "repository: find match data";

        match id {
            1 => Ok(MatchData {
                id,
                home: "Wolfsburg".to_owned(),
                away: "Bremen".to_owned(),
            }),
            BROKEN_ID => Err(Fault::builder()
                .op(op)
                .sub_service(SubService::Atb)
                .kind(Kind::DatabaseError)
                .info(("id", id))
                .source(std::io::Error::other("connection refused"))
                .build()),
            _ => Err(Fault::builder()
                .op(op)
                .sub_service(SubService::Atb)
                .kind(Kind::HttpNotFound)
                .info(("id", id))
                .message("record not found")
                .build()),
        }
    }

    pub fn all(&self) -> Result<Vec<MatchData>, Fault> {
        Err(Fault::builder()
            .op("repository: list match data")
            .sub_service(SubService::Atb)
            .kind(Kind::HttpNoContent)
            .build())
    }
}

pub struct MatchService {
    repository: Repository,
}

impl MatchService {
    pub const fn new() -> Self {
        Self { repository: Repository }
    }

    pub fn find(&self, id: u32) -> Result<MatchData, Fault> {
        self.repository.find(id).with_op("service: find match data by id")
    }

    pub fn all(&self) -> Result<Vec<MatchData>, Fault> {
        self.repository.all().with_op("service: list match data")
    }

    /// Rejects matches a team plays against itself
    pub fn validate(&self, data: &MatchData) -> Result<(), Fault> {
        if data.home == data.away {
            return Err(Fault::builder()
                .op("service: validate match data")
                .kind(Kind::InputError)
                .provided(data)
                .message("home and away team must differ")
                .build());
        }
        Ok(())
    }
}

pub fn router(responder: Responder) -> Router {
    Router::new()
        .route("/matches", get(list_matches).post(upload_match))
        .route("/matches/{id}", get(get_match))
        .with_state(responder)
}

async fn get_match(State(responder): State<Responder>, Path(raw_id): Path<String>) -> Response {
    let op = "controller: get match data";

    let Ok(id) = raw_id.parse::<u32>() else {
        let fault = Fault::builder()
            .op(op)
            .kind(Kind::HttpBadRequest)
            .info(("id", raw_id))
            .message("id is not a number")
            .build();
        return responder.fault(fault).message("Invalid match id").into_response();
    };

    match MatchService::new().find(id) {
        Ok(data) => Json(data).into_response(),
        Err(fault) => responder
            .respond(op, fault)
            .message("error while getting match data")
            .into_response(),
    }
}

async fn list_matches(State(responder): State<Responder>) -> Response {
    match MatchService::new().all() {
        Ok(data) => Json(data).into_response(),
        Err(fault) => responder.respond("controller: list match data", fault).into_response(),
    }
}

async fn upload_match(State(responder): State<Responder>, Json(data): Json<MatchData>) -> Response {
    match MatchService::new().validate(&data) {
        Ok(()) => Json(data).into_response(),
        Err(fault) => responder
            .respond("controller: upload match data", fault)
            .message("Invalid request body")
            .detail(format!("match {}", data.id))
            .into_response(),
    }
}
