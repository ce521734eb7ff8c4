//! Bot API round trips against a local mock server.

use mockito::Matcher;
use serde_json::json;
use tgb_core::{
    errors::Error,
    requests::{DeleteWebhookRequest, GetUpdatesRequest, SetWebhookRequest},
    types::{InputFile, UpdateKind},
    BotConfig, Provenance,
};
use tgb_http::{Bot, BotApi};

const TOKEN: &str = "4242:SECRETxyz";

fn bot_for(server: &mockito::ServerGuard) -> Bot {
    Bot::with_config(BotConfig::new(TOKEN).with_api_url(server.url())).unwrap()
}

fn path(operation: &str) -> String {
    format!("/bot{TOKEN}/{operation}")
}

#[tokio::test]
async fn get_updates_posts_json_and_decodes_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("getUpdates").as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"offset": 100, "limit": 10, "timeout": 0})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true,"result":[]}"#)
        .create_async()
        .await;

    let bot = bot_for(&server);
    let req = GetUpdatesRequest::new().offset(100).limit(10).timeout(0);
    let updates = bot.get_updates(&req).await.unwrap();

    assert!(updates.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn get_updates_decodes_messages_and_next_offset() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "ok": true,
        "result": [
            {
                "update_id": 500,
                "message": {
                    "message_id": 1,
                    "date": 1_700_000_000,
                    "chat": {"id": 42, "type": "private", "first_name": "Ann"},
                    "from": {"id": 42, "is_bot": false, "first_name": "Ann"},
                    "text": "/start",
                    "entities": [{"type": "bot_command", "offset": 0, "length": 6}]
                }
            },
            {
                "update_id": 501,
                "edited_message": {
                    "message_id": 1,
                    "date": 1_700_000_000,
                    "edit_date": 1_700_000_060,
                    "chat": {"id": 42, "type": "private", "first_name": "Ann"},
                    "text": "/start again"
                }
            }
        ]
    });
    server
        .mock("POST", path("getUpdates").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let updates = bot_for(&server)
        .get_updates(&GetUpdatesRequest::new().timeout(30))
        .await
        .unwrap();

    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].kind(), Some(UpdateKind::Message));
    assert_eq!(updates[1].kind(), Some(UpdateKind::EditedMessage));
    assert_eq!(updates.last().map(|u| u.next_offset()), Some(502));
    let text = updates[0].message.as_ref().and_then(|m| m.text.as_deref());
    assert_eq!(text, Some("/start"));
}

#[tokio::test]
async fn set_webhook_sends_multipart_with_secret_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("setWebhook").as_str())
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_header("x-telegram-bot-api-secret-token", "s3cret_token")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="url""#.to_string()),
            Matcher::Regex("https://example.com/hook".to_string()),
            Matcher::Regex(r#"name="certificate"; filename="public.pem""#.to_string()),
            Matcher::Regex("-----BEGIN CERTIFICATE-----".to_string()),
            Matcher::Regex(r#"name="max_connections""#.to_string()),
            Matcher::Regex(r#"\["message","callback_query"\]"#.to_string()),
            Matcher::Regex(r#"name="secret_token""#.to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":true,"description":"Webhook was set"}"#)
        .create_async()
        .await;

    let req = SetWebhookRequest::new("https://example.com/hook")
        .certificate(InputFile::memory(
            "public.pem",
            b"-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n".to_vec(),
        ))
        .max_connections(40)
        .allowed_updates([UpdateKind::Message, UpdateKind::CallbackQuery])
        .secret_token("s3cret_token");
    let ok = bot_for(&server).set_webhook(&req).await.unwrap();

    assert!(ok);
    mock.assert_async().await;
}

#[tokio::test]
async fn set_webhook_url_only_sends_one_part_and_no_header() {
    let mut server = mockito::Server::new_async().await;
    // The whole body: a single `url` part between the opening and closing boundary.
    let single_url_part = concat!(
        r#"\A--[^\r\n]+\r\n"#,
        r#"[^\r\n]*name="url"(\r\n[^\r\n]+)*\r\n\r\n"#,
        r#"https://example\.com/hook\r\n"#,
        r#"--[^\r\n]+--(\r\n)?\z"#,
    );
    let mock = server
        .mock("POST", path("setWebhook").as_str())
        .match_header("x-telegram-bot-api-secret-token", Matcher::Missing)
        .match_body(Matcher::Regex(single_url_part.to_string()))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":true}"#)
        .create_async()
        .await;

    let ok = bot_for(&server)
        .set_webhook(&SetWebhookRequest::new("https://example.com/hook"))
        .await
        .unwrap();

    assert!(ok);
    mock.assert_async().await;
}

#[tokio::test]
async fn set_webhook_with_bad_secret_never_hits_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", path("setWebhook").as_str())
        .expect(0)
        .create_async()
        .await;

    let err = bot_for(&server)
        .set_webhook(&SetWebhookRequest::new("https://example.com/hook").secret_token("no spaces"))
        .await
        .unwrap_err();

    assert_eq!(err.provenance(), Provenance::Local);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_webhook_ok_false_on_http_200_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", path("deleteWebhook").as_str())
        .match_body(Matcher::Json(json!({"drop_pending_updates": true})))
        .with_status(200)
        .with_body(r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#)
        .create_async()
        .await;

    let err = bot_for(&server)
        .delete_webhook(&DeleteWebhookRequest::drop_pending_updates(true))
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("HTTP status 200"), "{msg}");
    assert!(msg.contains("Telegram code 401"), "{msg}");
    assert!(msg.contains("Unauthorized"), "{msg}");
    assert!(matches!(
        err,
        Error::Api {
            status: 200,
            error_code: Some(401),
            ..
        }
    ));
    assert_eq!(err.provenance(), Provenance::Remote);
}

#[tokio::test]
async fn get_webhook_info_uses_get() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", path("getWebhookInfo").as_str())
        .with_status(200)
        .with_body(
            json!({
                "ok": true,
                "result": {
                    "url": "https://example.com/hook",
                    "has_custom_certificate": false,
                    "pending_update_count": 2,
                    "max_connections": 40
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let info = bot_for(&server).get_webhook_info().await.unwrap();

    assert_eq!(info.url, "https://example.com/hook");
    assert_eq!(info.pending_update_count, 2);
    assert_eq!(info.max_connections, Some(40));
    assert_eq!(info.last_error_date, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn flood_control_exposes_retry_after() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", path("getUpdates").as_str())
        .with_status(429)
        .with_body(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 3","parameters":{"retry_after":3}}"#,
        )
        .create_async()
        .await;

    let err = bot_for(&server)
        .get_updates(&GetUpdatesRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.retry_after(), Some(3));
    assert_eq!(err.provenance(), Provenance::Remote);
}

#[tokio::test]
async fn non_json_gateway_error_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", path("getWebhookInfo").as_str())
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = bot_for(&server).get_webhook_info().await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "{err:?}");
    assert_eq!(err.provenance(), Provenance::Local);
    let msg = err.to_string();
    assert!(msg.contains("HTTP status 502"), "{msg}");
    assert!(msg.contains("Bad Gateway"), "{msg}");
}

#[tokio::test]
async fn garbage_on_200_is_a_local_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", path("deleteWebhook").as_str())
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = bot_for(&server)
        .delete_webhook(&DeleteWebhookRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error_without_token() {
    // Nothing listens on the discard port.
    let bot = Bot::with_config(BotConfig::new(TOKEN).with_api_url("http://127.0.0.1:9")).unwrap();

    let err = bot.get_webhook_info().await.unwrap_err();

    assert_eq!(err.provenance(), Provenance::Transport);
    let msg = err.to_string();
    assert!(
        msg.starts_with("error sending GET request to getWebhookInfo"),
        "{msg}"
    );
    assert!(!msg.contains("SECRETxyz"), "{msg}");
}

#[tokio::test]
async fn bot_works_behind_the_port_trait() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", path("getUpdates").as_str())
        .with_status(200)
        .with_body(r#"{"ok":true,"result":[{"update_id":7}]}"#)
        .create_async()
        .await;

    let api: std::sync::Arc<dyn BotApi> = std::sync::Arc::new(bot_for(&server));
    let updates = api
        .get_updates(&GetUpdatesRequest::new().offset(7))
        .await
        .unwrap();

    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].kind(), None);
}
