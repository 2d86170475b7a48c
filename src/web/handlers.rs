use super::state::SharedState;
use crate::Joback::cp_estimator::{GroupCount, estimate_with};
use crate::Joback::group_table::joback_table;
use crate::Joback::joback_api::{JobackError, check_interval};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Html,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// body of `POST /calcular`
#[derive(Debug, Clone, Deserialize)]
pub struct CalcRequest {
    #[serde(default)]
    pub grupos_funcionales: GroupCount,
    pub temperatura_min: Option<f64>,
    pub temperatura_max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalcResponse {
    Result { resultado: f64, formula: String },
    Error { error: String },
}

impl From<JobackError> for CalcResponse {
    fn from(err: JobackError) -> Self {
        CalcResponse::Error {
            error: err.to_string(),
        }
    }
}

/// decodes the request, checks the interval and runs the estimator
pub fn process_request(request: CalcRequest, state: &SharedState) -> CalcResponse {
    let t_min = request.temperatura_min.unwrap_or(state.default_temperature);
    let t_max = request.temperatura_max.unwrap_or(state.default_temperature);
    if let Err(e) = check_interval(t_min, t_max) {
        warn!("rejected interval [{}, {}]", t_min, t_max);
        return e.into();
    }
    match estimate_with(&request.grupos_funcionales, t_min, t_max, &state.integrator) {
        Ok(estimate) => CalcResponse::Result {
            resultado: estimate.value,
            formula: estimate.formula,
        },
        Err(e) => e.into(),
    }
}

pub async fn calcular(
    State(state): State<SharedState>,
    payload: Result<Json<CalcRequest>, JsonRejection>,
) -> (StatusCode, Json<CalcResponse>) {
    match payload {
        Ok(Json(request)) => {
            info!(
                "POST /calcular: {} groups, [{:?}, {:?}]",
                request.grupos_funcionales.len(),
                request.temperatura_min,
                request.temperatura_max
            );
            (StatusCode::OK, Json(process_request(request, &state)))
        }
        Err(rejection) => {
            warn!("POST /calcular: malformed request: {}", rejection.body_text());
            (
                StatusCode::BAD_REQUEST,
                Json(CalcResponse::Error {
                    error: rejection.body_text(),
                }),
            )
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GroupsResponse {
    pub grupos: Vec<&'static str>,
}

pub async fn grupos() -> Json<GroupsResponse> {
    Json(GroupsResponse {
        grupos: joback_table().labels(),
    })
}

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>Calor específico por el método de Joback</title>
</head>
<body>
    <h1>Calor específico por el método de Joback</h1>
    <p>POST <code>/calcular</code> con un cuerpo JSON:</p>
    <pre>{"grupos_funcionales": {"-CH3": 1, "&gt;CH2": 1, "-OH(alcohol)": 1},
 "temperatura_min": 298.15, "temperatura_max": 500}</pre>
    <p>Respuesta: <code>{"resultado": ..., "formula": "CP = ..."}</code> o <code>{"error": ...}</code>.</p>
    <p>Grupos disponibles: GET <a href="/grupos"><code>/grupos</code></a>.</p>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
