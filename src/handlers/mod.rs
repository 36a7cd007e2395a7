pub mod opinion_handlers;
