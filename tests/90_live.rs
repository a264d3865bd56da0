//! End-to-end checks against a real PostgreSQL. Skipped without DATABASE_URL.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{live_server, token};

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

async fn list(client: &reqwest::Client, url: String) -> Result<Vec<Value>> {
    let res = client.get(url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(res.json::<Vec<Value>>().await?)
}

#[tokio::test]
async fn created_category_shows_up_in_listing() -> Result<()> {
    let Some(server) = live_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();
    let name = unique("Tech");

    let res = client
        .post(format!("{}/categories", server.base_url))
        .json(&json!({ "categoryName": name }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "message": "Categoría creada exitosamente" }));

    let rows = list(&client, format!("{}/categories", server.base_url)).await?;
    assert!(
        rows.iter().any(|row| row["categoryName"] == json!(name)),
        "category {} missing from {:?}",
        name,
        rows
    );
    Ok(())
}

#[tokio::test]
async fn updating_unknown_post_changes_nothing() -> Result<()> {
    let Some(server) = live_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();
    let title = unique("ghost");

    let res = client
        .put(format!("{}/posts/{}", server.base_url, i64::MAX))
        .json(&json!({ "title": title, "content": "nada" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let rows = list(&client, format!("{}/posts", server.base_url)).await?;
    assert!(rows.iter().all(|row| row["title"] != json!(title)));
    Ok(())
}

#[tokio::test]
async fn repeated_post_delete_is_a_noop_success() -> Result<()> {
    let Some(server) = live_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();
    let title = unique("doomed");

    client
        .post(format!("{}/posts", server.base_url))
        .json(&json!({ "title": title, "content": "bye", "userId": 1 }))
        .send()
        .await?;
    let rows = list(&client, format!("{}/posts", server.base_url)).await?;
    let id = rows
        .iter()
        .find(|row| row["title"] == json!(title))
        .and_then(|row| row["id"].as_i64())
        .expect("created post listed");

    for _ in 0..2 {
        let res = client
            .delete(format!("{}/posts/{}", server.base_url, id))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let rows = list(&client, format!("{}/posts", server.base_url)).await?;
    assert!(rows.iter().all(|row| row["id"] != json!(id)));
    Ok(())
}

#[tokio::test]
async fn member_cannot_delete_another_user() -> Result<()> {
    let Some(server) = live_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();
    let username = unique("victim");

    let res = client
        .post(format!("{}/users", server.base_url))
        .bearer_auth(token(1, 2))
        .json(&json!({
            "username": username,
            "email": "victim@example.com",
            "password": "pw",
            "role_id": 1
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let users = list(&client, format!("{}/users", server.base_url)).await?;
    let id = users
        .iter()
        .find(|row| row["username"] == json!(username))
        .and_then(|row| row["id"].as_i64())
        .expect("created user listed");

    let res = client
        .delete(format!("{}/users/{}", server.base_url, id))
        .bearer_auth(token(id + 1, 1))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let users = list(&client, format!("{}/users", server.base_url)).await?;
    assert!(users.iter().any(|row| row["id"] == json!(id)));
    Ok(())
}

#[tokio::test]
async fn member_cannot_create_user() -> Result<()> {
    let Some(server) = live_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();
    let username = unique("intruder");

    let res = client
        .post(format!("{}/users", server.base_url))
        .bearer_auth(token(3, 1))
        .json(&json!({
            "username": username,
            "email": "intruder@example.com",
            "password": "pw",
            "role_id": 2
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let users = list(&client, format!("{}/users", server.base_url)).await?;
    assert!(users.iter().all(|row| row["username"] != json!(username)));
    Ok(())
}
