//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::card::CardDraft;
use crate::domain::{CategoryRegistry, Problem};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Categories,
    SelectCategory {
        key: String,
    },
    Search {
        text: String,
    },
    Open {
        #[serde(rename = "problemId")]
        problem_id: String,
    },
    Close,
    Next,
    Prev,
    StartDraft,
    UpdateDraft {
        draft: CardDraft,
    },
    SubmitDraft,
    CancelDraft,
    DeleteCard {
        #[serde(rename = "problemId")]
        problem_id: String,
    },
    Export {
        #[serde(rename = "problemId")]
        problem_id: String,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Categories {
        registry: CategoryRegistry,
    },
    /// Full snapshot of what the page should show.
    View {
        category: Option<String>,
        search: String,
        problems: Vec<ProblemOut>,
        cursor: Option<usize>,
        draft: Option<CardDraft>,
    },
    Snippet {
        #[serde(rename = "problemId")]
        problem_id: String,
        text: String,
    },
    Error {
        message: String,
    },
}

/// DTO used by both WS and HTTP for card delivery.
#[derive(Debug, Serialize)]
pub struct ProblemOut {
    #[serde(flatten)]
    pub problem: Problem,
    pub deletable: bool,
}

/// Convert an internal `Problem` to the public DTO.
pub fn to_out(p: &Problem) -> ProblemOut {
    ProblemOut {
        problem: p.clone(),
        deletable: p.is_custom(),
    }
}

pub fn to_out_list(list: &[&Problem]) -> Vec<ProblemOut> {
    list.iter().map(|p| to_out(p)).collect()
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct ProblemsOut {
    pub problems: Vec<ProblemOut>,
}

#[derive(Serialize)]
pub struct DeletedOut {
    pub deleted: bool,
}

#[derive(Serialize)]
pub struct SnippetOut {
    pub snippet: String,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
