mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn deleting_a_user_deletes_their_channels() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        return Ok(());
    }

    let (owner, email) = common::signup_and_login(server, "cascade").await?;
    let anon = reqwest::Client::new();

    // Two channels under the account
    let mut ids = Vec::new();
    for name in ["first", "second"] {
        let res = owner
            .post(format!("{}/channels", server.base_url))
            .json(&json!({ "channelName": name }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body = res.json::<serde_json::Value>().await?;
        ids.push(body["data"]["id"].as_str().expect("channel id").to_string());
    }

    // Delete the account
    let res = owner.delete(format!("{}/users", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Channels are gone with it
    for id in &ids {
        let res = anon
            .get(format!("{}/channels/{}", server.base_url, id))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "channel {} should be gone", id);
    }

    // So is the user record
    let res = anon
        .get(format!("{}/users", server.base_url))
        .query(&[("email", email.as_str())])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // The token is still cryptographically valid (stateless sessions),
    // but the account row is gone: a repeat delete finds nothing.
    let res = owner.delete(format!("{}/users", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn deleted_owner_cannot_create_channels() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        return Ok(());
    }

    let (owner, _) = common::signup_and_login(server, "ghost-owner").await?;

    let res = owner.delete(format!("{}/users", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Session still verifies, but the owning user no longer exists
    let res = owner
        .post(format!("{}/channels", server.base_url))
        .json(&json!({ "channelName": "orphan" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
