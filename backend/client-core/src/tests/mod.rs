mod classifier;
mod invoker;
mod request;
mod response;
