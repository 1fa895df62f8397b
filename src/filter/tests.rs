// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use log::Level;

use super::*;
use crate::RecordBuilder;

fn counting(result: FilterResult, invocations: &Arc<AtomicUsize>) -> CustomFilter {
    let invocations = invocations.clone();
    CustomFilter::new(move |_| {
        invocations.fetch_add(1, Ordering::SeqCst);
        result
    })
}

#[test]
fn deny_short_circuits() {
    let before = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));
    let chain = FilterChain::new()
        .filter(counting(FilterResult::Neutral, &before))
        .filter(counting(FilterResult::Deny, &before))
        .filter(counting(FilterResult::Neutral, &after));

    let record = RecordBuilder::default().build();
    assert!(!chain.evaluate(&record));
    assert_eq!(before.load(Ordering::SeqCst), 2);
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

#[test]
fn accept_short_circuits() {
    let before = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));
    let chain = FilterChain::new()
        .filter(counting(FilterResult::Neutral, &before))
        .filter(counting(FilterResult::Accept, &before))
        .filter(counting(FilterResult::Deny, &after));

    let record = RecordBuilder::default().build();
    assert!(chain.evaluate(&record));
    assert_eq!(before.load(Ordering::SeqCst), 2);
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_chain_emits() {
    let chain = FilterChain::new();
    let record = RecordBuilder::default().build();
    assert!(chain.evaluate(&record));
}

#[test]
fn all_neutral_chain_emits() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let chain = FilterChain::new()
        .filter(counting(FilterResult::Neutral, &invocations))
        .filter(counting(FilterResult::Neutral, &invocations))
        .filter(counting(FilterResult::Neutral, &invocations));

    let record = RecordBuilder::default().build();
    assert!(chain.evaluate(&record));
    assert_eq!(invocations.load(Ordering::SeqCst), 3);
}

#[test]
fn order_changes_outcome() {
    let record = RecordBuilder::default().build();

    let accept_first = FilterChain::new()
        .filter(CustomFilter::new(|_| FilterResult::Accept))
        .filter(DenyAllFilter::new());
    assert!(accept_first.evaluate(&record));

    let deny_first = FilterChain::new()
        .filter(DenyAllFilter::new())
        .filter(CustomFilter::new(|_| FilterResult::Accept));
    assert!(!deny_first.evaluate(&record));
}

#[test]
fn deny_all_flips_default_permit() {
    let record = RecordBuilder::default().level(Level::Info).build();

    let chain = FilterChain::new()
        .filter(log::LevelFilter::Info)
        .filter(DenyAllFilter::new());
    assert!(!chain.evaluate(&record));

    let chain = FilterChain::new()
        .filter(MessageFilter::contains(""))
        .filter(DenyAllFilter::new());
    assert!(chain.evaluate(&record));
}

#[test]
fn level_threshold() {
    let chain = FilterChain::new().filter(log::LevelFilter::Info);

    let debug = RecordBuilder::default().level(Level::Debug).build();
    assert!(!chain.evaluate(&debug));

    let info = RecordBuilder::default().level(Level::Info).build();
    assert!(chain.evaluate(&info));

    let error = RecordBuilder::default().level(Level::Error).build();
    assert!(chain.evaluate(&error));
}

#[test]
fn level_threshold_off_denies_everything() {
    let chain = FilterChain::new().filter(log::LevelFilter::Off);

    let error = RecordBuilder::default().level(Level::Error).build();
    assert!(!chain.evaluate(&error));
}

#[test]
fn level_range_denies_outside_band() {
    let chain = FilterChain::new().filter(LevelRangeFilter::new(Level::Error, Level::Info));

    let debug = RecordBuilder::default().level(Level::Debug).build();
    assert!(!chain.evaluate(&debug));

    let warn = RecordBuilder::default().level(Level::Warn).build();
    assert!(chain.evaluate(&warn));
}

#[test]
fn level_range_accept_on_match_short_circuits() {
    let chain = FilterChain::new()
        .filter(LevelRangeFilter::new(Level::Error, Level::Info).accept_on_match(true))
        .filter(DenyAllFilter::new());

    let warn = RecordBuilder::default().level(Level::Warn).build();
    assert!(chain.evaluate(&warn));

    let debug = RecordBuilder::default().level(Level::Debug).build();
    assert!(!chain.evaluate(&debug));
}

#[test]
fn message_filter_accepts_on_match() {
    let chain = FilterChain::new()
        .filter(MessageFilter::contains("hello"))
        .filter(DenyAllFilter::new());

    let matching = RecordBuilder::default()
        .args(format_args!("hello world"))
        .build();
    assert!(chain.evaluate(&matching));

    let other = RecordBuilder::default()
        .args(format_args!("goodbye world"))
        .build();
    assert!(!chain.evaluate(&other));
}

#[test]
fn message_filter_deny_on_match() {
    let chain = FilterChain::new().filter(MessageFilter::contains("noisy").deny_on_match(true));

    let noisy = RecordBuilder::default()
        .args(format_args!("noisy heartbeat"))
        .build();
    assert!(!chain.evaluate(&noisy));

    let other = RecordBuilder::default().args(format_args!("all good")).build();
    assert!(chain.evaluate(&other));
}

#[test]
fn target_filter_applies_to_prefix() {
    let chain =
        FilterChain::new().filter(TargetFilter::level_for("app", log::LevelFilter::Warn));

    let info = RecordBuilder::default()
        .level(Level::Info)
        .target("app::module")
        .build();
    assert!(!chain.evaluate(&info));

    let warn = RecordBuilder::default()
        .level(Level::Warn)
        .target("app::module")
        .build();
    assert!(chain.evaluate(&warn));

    let unrelated = RecordBuilder::default()
        .level(Level::Info)
        .target("dependency")
        .build();
    assert!(chain.evaluate(&unrelated));
}

#[test]
fn target_filter_negated_prefix() {
    let chain =
        FilterChain::new().filter(TargetFilter::level_for_not("app", log::LevelFilter::Warn));

    let own = RecordBuilder::default()
        .level(Level::Info)
        .target("app::module")
        .build();
    assert!(chain.evaluate(&own));

    let dependency = RecordBuilder::default()
        .level(Level::Info)
        .target("dependency")
        .build();
    assert!(!chain.evaluate(&dependency));
}

#[test]
fn env_filter_spec() {
    let chain = FilterChain::new().filter(EnvFilter::from("info"));

    let debug = RecordBuilder::default().level(Level::Debug).build();
    assert!(!chain.evaluate(&debug));

    let info = RecordBuilder::default().level(Level::Info).build();
    assert!(chain.evaluate(&info));
}
