//! Wire model <-> domain mappers

mod user_likes;
