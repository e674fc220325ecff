mod api_key;
mod provider;
