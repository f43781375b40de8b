use crate::server::{
    error::sequence::SequenceError,
    model::counter::CounterName,
    service::{
        identifier::{ApplicationIdFormatter, IdentifierSettings},
        sequence::SequenceIssuer,
    },
};
use test_utils::builder::TestBuilder;

mod concurrent;
mod current;
mod next;
