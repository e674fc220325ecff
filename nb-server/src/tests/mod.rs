mod api;
mod web;
