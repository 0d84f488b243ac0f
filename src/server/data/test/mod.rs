mod guild_command;
