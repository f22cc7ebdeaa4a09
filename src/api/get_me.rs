#![allow(unused_parens)]
//! Get basic information about the bot method `getMe`
//! [More info](https://core.telegram.org/bots/api#getme)
use crate::prelude::*;
bot_api_method! {
    method = "getMe",
    request = RequestGetMe {
        required {},
        optional {}
    },
    response = User,
}
