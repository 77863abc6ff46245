use serde::Serialize;

/// `{"msg": ..., "results": [...]}`
#[derive(Debug, Serialize)]
pub struct ListBody<T> {
    pub msg: &'static str,
    pub results: Vec<T>,
}

impl<T> ListBody<T> {
    pub fn ok(results: Vec<T>) -> Self { Self { msg: "ok", results } }
}

/// `{"msg": ..., "result": {...}}`
#[derive(Debug, Serialize)]
pub struct ItemBody<T> {
    pub msg: String,
    pub result: T,
}

impl<T> ItemBody<T> {
    pub fn ok(result: T) -> Self { Self { msg: "ok".into(), result } }

    pub fn with_msg(msg: impl Into<String>, result: T) -> Self { Self { msg: msg.into(), result } }
}

#[derive(Debug, Serialize)]
pub struct MsgBody {
    pub msg: String,
}

impl MsgBody {
    pub fn new(msg: impl Into<String>) -> Self { Self { msg: msg.into() } }
}
