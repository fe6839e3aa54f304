pub mod article_controller;
