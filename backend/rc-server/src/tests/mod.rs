mod api_error;
mod halt;
