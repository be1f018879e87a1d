
mod cipher_tests;
