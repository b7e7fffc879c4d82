/// `GET /` greeting.
pub async fn home_handler() -> &'static str {
    "Hello World!"
}
