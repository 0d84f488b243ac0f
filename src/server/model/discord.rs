use serenity::all::User;

use crate::model::discord::DiscordUserDto;

/// Discord user profile as returned by the user lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordUser {
    pub id: u64,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bot: bool,
}

impl DiscordUser {
    /// Converts a Serenity user parsed from the Discord API response.
    pub fn from_serenity(user: User) -> Self {
        Self {
            id: user.id.get(),
            avatar_url: user.avatar_url(),
            username: user.name,
            global_name: user.global_name,
            bot: user.bot,
        }
    }

    pub fn into_dto(self) -> DiscordUserDto {
        DiscordUserDto {
            id: self.id,
            username: self.username,
            global_name: self.global_name,
            avatar_url: self.avatar_url,
            bot: self.bot,
        }
    }
}
