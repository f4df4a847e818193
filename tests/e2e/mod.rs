mod test_client;
mod test_cors;
mod test_health;
