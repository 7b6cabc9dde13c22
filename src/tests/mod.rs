
mod integration_test;
