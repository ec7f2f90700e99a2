//! Version hierarchies served by the test server
//!
//! Shapes follow the real game-versions API: option levels carry a message,
//! the top of some branches is a bare array, and leaves describe a game.

#![allow(dead_code)]

use super::server::{TestServer, TestServerBuilder};
use serde_json::json;

/// Routes for a small Minecraft Java hierarchy
///
/// ```text
/// /game-versions                    -> paper | vanilla
/// /game-versions/paper              -> 1.20.4 | 1.21
/// /game-versions/paper/1.21         -> 130 | 129
/// /game-versions/paper/1.21/130     -> minecraft-java 1.21-paper-130
/// /game-versions/vanilla            -> ["1.21"] (bare array)
/// /game-versions/vanilla/1.21       -> minecraft-java 1.21-vanilla
/// ```
pub fn minecraft_routes() -> TestServerBuilder {
    TestServer::builder()
        .get(
            "/game-versions",
            json!({"message": "Select Platform", "options": ["paper", "vanilla"]}),
        )
        .get(
            "/game-versions/paper",
            json!({"message": "Select Game Version", "options": ["1.20.4", "1.21"]}),
        )
        .get(
            "/game-versions/paper/1.21",
            json!({"message": "Select Build", "options": ["130", "129"]}),
        )
        .get(
            "/game-versions/paper/1.21/130",
            json!({"game": {"type": "minecraft_java", "version": "1.21", "loader": {"Paper": {"build": 130}}}}),
        )
        .get("/game-versions/vanilla", json!(["1.21"]))
        .get(
            "/game-versions/vanilla/1.21",
            json!({"game": {"type": "minecraft_java", "version": "1.21", "loader": "Vanilla"}}),
        )
}

pub fn minecraft_server() -> anyhow::Result<TestServer> {
    minecraft_routes().start()
}
