//! Plumbing shared by the server crate and the `server` binary.

pub mod types;
pub mod env;
pub mod utils {
    pub mod logging;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn route_entry_serializes_method_and_path() {
        let r = types::RouteEntry { method: "GET", path: "/planets" };
        let v = serde_json::to_value(r).unwrap();
        assert_eq!(v["method"], "GET");
        assert_eq!(v["path"], "/planets");
    }
}
