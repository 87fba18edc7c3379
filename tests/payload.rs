use serde_json::{Value, json};

use slack_payload::{
    Action, ActionStyle, Attachment, Field, Footer, Message, ValidationError, serialize,
};

#[test]
fn text_only_message() {
    let message = Message::new("Hello").unwrap();
    assert_eq!(serialize(&message).unwrap(), r#"{"text":"Hello"}"#);
}

#[test]
fn message_overrides_without_channel_or_attachments() {
    let message = Message::builder("Hi")
        .username("Bot")
        .icon_emoji(":bell:")
        .build()
        .unwrap();

    assert_eq!(
        serialize(&message).unwrap(),
        r#"{"text":"Hi","username":"Bot","icon_emoji":":bell:"}"#
    );
}

#[test]
fn attachment_with_color_and_one_field() {
    let attachment = Attachment::builder()
        .color("good")
        .field(Field::new("Price", "$10", true))
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_string(&attachment).unwrap(),
        r#"{"color":"good","fields":[{"title":"Price","value":"$10","short":true}]}"#
    );
}

#[test]
fn bad_color_is_rejected() {
    let result = Attachment::builder().color("not-a-color").build();
    assert!(matches!(result, Err(ValidationError::InvalidColor(_))));
}

#[test]
fn unset_options_never_serialize_as_null_or_empty() {
    let attachment = Attachment::builder()
        .title("Only a title")
        .fields(Vec::new())
        .actions(Vec::new())
        .build()
        .unwrap();
    let message = Message::builder("Hi").attachment(attachment).build().unwrap();

    let json: Value = serde_json::from_str(&serialize(&message).unwrap()).unwrap();
    assert_eq!(
        json,
        json!({"text": "Hi", "attachments": [{"title": "Only a title"}]})
    );
}

#[test]
fn full_message_round_trip_through_json() {
    let first = Attachment::builder()
        .color("#ff0000")
        .pretext("Heads up")
        .title("Price drop")
        .title_link("https://example.com/item/1")
        .body("Now cheaper")
        .fields([
            Field::short("Was", "$500"),
            Field::short("Now", "$450"),
            Field::long("Seller", "Marrkt"),
        ])
        .action(Action::button("Open", "https://example.com/item/1").unwrap())
        .action(
            Action::parse("Buy", "https://example.com/buy/1", "Primary", "BUTTON").unwrap(),
        )
        .footer(
            Footer::new("Price watcher")
                .unwrap()
                .with_icon("https://example.com/icon.png")
                .unwrap()
                .with_epoch_seconds(1_714_564_800),
        )
        .build()
        .unwrap();
    let second = Attachment::builder().color("warning").title("Second").build().unwrap();

    let message = Message::builder("Updates")
        .channel("#deals")
        .attachments([first, second])
        .build()
        .unwrap();

    let json: Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        json!({
            "text": "Updates",
            "channel": "#deals",
            "attachments": [
                {
                    "color": "#ff0000",
                    "pretext": "Heads up",
                    "title": "Price drop",
                    "title_link": "https://example.com/item/1",
                    "text": "Now cheaper",
                    "fields": [
                        {"title": "Was", "value": "$500", "short": true},
                        {"title": "Now", "value": "$450", "short": true},
                        {"title": "Seller", "value": "Marrkt", "short": false}
                    ],
                    "actions": [
                        {"type": "button", "text": "Open", "url": "https://example.com/item/1", "style": "default"},
                        {"type": "button", "text": "Buy", "url": "https://example.com/buy/1", "style": "primary"}
                    ],
                    "footer": "Price watcher",
                    "footer_icon": "https://example.com/icon.png",
                    "ts": 1_714_564_800
                },
                {"color": "warning", "title": "Second"}
            ]
        })
    );
}

#[test]
fn serialization_is_idempotent() {
    let message = Message::builder("Same")
        .username("Bot")
        .attachment(
            Attachment::builder()
                .color("danger")
                .field(Field::short("a", "1"))
                .action(
                    Action::button("x", "https://example.com")
                        .unwrap()
                        .with_style(ActionStyle::Danger),
                )
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let once = serialize(&message).unwrap();
    let twice = serialize(&message).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn validation_errors_surface_from_each_builder() {
    assert!(Footer::new("x".repeat(301)).is_err());
    assert!(Footer::new("x").unwrap().with_icon("icons/x.png").is_err());
    assert!(Action::button("x", "example.com").is_err());
    assert!(Action::button("x", "ftp://example.com").is_err());
    assert!(Attachment::builder().image_url("images/1.png").build().is_err());
    assert_eq!(Message::new("").unwrap_err(), ValidationError::EmptyText);
}
