use std::rc::Rc;

use assert_call::{call, CallRecorder};

use super::*;

#[test]
fn from_fn_calls_on_drop() {
    let mut cr = CallRecorder::new();
    let s = Subscription::from_fn(|| call!("unsubscribe"));
    cr.verify(());
    drop(s);
    cr.verify("unsubscribe");
}

#[test]
fn empty_does_nothing() {
    let mut cr = CallRecorder::new();
    drop(Subscription::empty());
    drop(Subscription::default());
    cr.verify(());
}

#[test]
fn from_weak_fn_alive() {
    let mut cr = CallRecorder::new();
    let rc = Rc::new(5);
    let s = Subscription::from_weak_fn(Rc::downgrade(&rc), |x| call!("{x}"));
    drop(s);
    cr.verify("5");
}

#[test]
fn from_weak_fn_dropped() {
    let mut cr = CallRecorder::new();
    let rc = Rc::new(5);
    let s = Subscription::from_weak_fn(Rc::downgrade(&rc), |x| call!("{x}"));
    drop(rc);
    drop(s);
    cr.verify(());
}
