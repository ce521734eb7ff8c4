//! Bot API entities, modelled field by field after the JSON schema.
//!
//! Optional attributes are `Option`s and decode to `None` when absent. Unknown
//! keys are ignored, and tagged unions fall back to an `Unknown` variant, so
//! newer Bot API versions keep decoding.

pub mod boost;
pub mod chat;
pub mod commands;
pub mod input;
pub mod keyboard;
pub mod media;
pub mod message;
pub mod payments;
pub mod reaction;
pub mod service;
pub mod update;
pub mod user;
pub mod webhook;

pub use boost::{ChatBoost, ChatBoostRemoved, ChatBoostSource, ChatBoostUpdated};
pub use chat::{
    BackgroundFill, BackgroundType, Chat, ChatBackground, ChatId, ChatMember, ChatType,
};
pub use commands::{BotCommand, BotCommandScope, MenuButton, WebAppInfo};
pub use input::{InputFile, InputMedia, InputPaidMedia};
pub use keyboard::{InlineKeyboardButton, InlineKeyboardMarkup, LoginUrl};
pub use media::{
    Animation, Audio, Contact, Dice, Document, Game, Location, PaidMedia, PaidMediaInfo,
    PhotoSize, Poll, PollOption, Sticker, Story, Venue, Video, VideoNote, Voice,
};
pub use message::{
    ExternalReplyInfo, InaccessibleMessage, LinkPreviewOptions, MaybeInaccessibleMessage,
    Message, MessageEntity, MessageKind, MessageOrigin, TextQuote,
};
pub use payments::{Invoice, OrderInfo, RefundedPayment, ShippingAddress, SuccessfulPayment};
pub use reaction::{MessageReactionUpdated, ReactionCount, ReactionType};
pub use update::{CallbackQuery, ChatInviteLink, ChatMemberUpdated, Update, UpdateKind};
pub use user::User;
pub use webhook::{WebhookInfo, SECRET_TOKEN_HEADER};
