use result_envelope::*;

#[test]
fn given_default_options_when_building_then_exception_without_messages() {
    let envelope = ResultEnvelope::new();

    assert_eq!(envelope.status, Status::Exception);
    assert!(envelope.is_error());
    assert!(envelope.messages().is_empty());
    assert!(envelope.log().is_empty());
    assert_eq!(envelope.operation(), "");
    assert_eq!(envelope.event_id(), "unknown");
    assert_eq!(envelope.focus_control(), None);
}

#[test]
fn given_ok_status_and_message_when_building_then_single_info_message() {
    let envelope = ResultEnvelope::builder()
        .status(Status::Ok)
        .message("saved")
        .build();

    assert!(envelope.is_ok());
    assert_eq!(envelope.messages(), &["saved"]);
    assert_eq!(envelope.log().notes()[0].kind, NoteKind::Info);
}

#[test]
fn given_failure_family_status_when_building_with_message_then_error_note() {
    for status in [Status::Exception, Status::Invalid, Status::No] {
        let envelope = ResultEnvelope::builder()
            .status(status)
            .message("rejected")
            .build();

        assert_eq!(envelope.log().count_of(NoteKind::Error), 1, "{status}");
        assert_eq!(envelope.messages(), &["rejected"]);
    }
    for status in [Status::Ok, Status::Valid, Status::Yes] {
        let envelope = ResultEnvelope::builder()
            .status(status)
            .message("accepted")
            .build();

        assert_eq!(envelope.log().count_of(NoteKind::Info), 1, "{status}");
    }
}

#[test]
fn given_prefix_option_when_adding_messages_then_every_message_is_prefixed() {
    let mut envelope = ResultEnvelope::builder().prefix("[billing] ").build();

    envelope.add_warning("card expires soon").add_success("charged");

    assert_eq!(envelope.prefix(), "[billing] ");
    assert_eq!(
        envelope.messages(),
        &["[billing] card expires soon", "[billing] charged"]
    );
}

#[test]
fn given_operation_in_message_when_adding_then_operation_is_prepended() {
    let mut envelope = ResultEnvelope::builder()
        .operation("inventory::Reserve")
        .use_operation_in_message(true)
        .build();

    envelope.add_info(format!("{} units held", 3));

    assert_eq!(envelope.operation(), "reserve");
    assert_eq!(envelope.messages(), &[" reserve: 3 units held"]);
}

#[test]
fn given_operation_in_message_without_operation_when_adding_then_message_is_untouched() {
    let mut envelope = ResultEnvelope::builder()
        .use_operation_in_message(true)
        .build();

    envelope.add_error("boom");

    assert_eq!(envelope.messages(), &["boom"]);
}

#[test]
fn given_mixed_adds_when_inspecting_then_messages_follow_call_order() {
    let mut envelope = ResultEnvelope::new();

    envelope
        .add_info("one")
        .add_warning("two")
        .add_error("three")
        .add_success("four")
        .add_raw_message("five");

    assert_eq!(envelope.messages(), &["one", "two", "three", "four", "five"]);
    let kinds: Vec<_> = envelope.log().notes().iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NoteKind::Info,
            NoteKind::Warning,
            NoteKind::Error,
            NoteKind::Success,
            NoteKind::Application
        ]
    );
}

#[test]
fn given_error_value_when_adding_err_then_its_display_is_recorded() {
    let err = "abc".parse::<i32>().unwrap_err();
    let mut envelope = ResultEnvelope::new();

    envelope.add_err(&err);

    assert_eq!(envelope.messages(), &[err.to_string()]);
    assert_eq!(envelope.log().count_of(NoteKind::Error), 1);
}

#[test]
fn given_missing_error_when_adding_err_with_alt_then_alt_message_is_used() {
    let mut envelope = ResultEnvelope::new();

    envelope.add_err_with_alt(None::<std::io::Error>, format!("record {} not found", 7));
    envelope.add_err_with_alt(None::<std::io::Error>, "");
    envelope.add_err_with_alt(
        Some(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
        "ignored",
    );

    assert_eq!(envelope.messages(), &["record 7 not found", "disk full"]);
}

#[test]
fn given_rows_affected_when_reporting_then_info_reflects_count() {
    let mut envelope = ResultEnvelope::new();

    envelope.rows_affected_info(3).rows_affected_info(0);

    assert_eq!(envelope.messages(), &["3 rows affected", "No rows affected"]);
}

#[test]
fn given_focus_anchor_when_appending_then_composite_and_reset_restores_anchor() {
    let mut envelope = ResultEnvelope::new();

    envelope.set_focus_control("x", false);
    envelope.set_focus_control("y", true);
    assert_eq!(envelope.focus_control(), Some("x_y"));
    assert_eq!(envelope.initial_focus_control(), "x");

    envelope.set_focus_control("z", true);
    assert_eq!(envelope.focus_control(), Some("x_z"));

    envelope.reset_focus_control();
    assert_eq!(envelope.focus_control(), Some("x"));
}

#[test]
fn given_initial_focus_option_when_building_then_focus_is_anchored() {
    let mut envelope = ResultEnvelope::builder().focus_control("address").build();
    assert_eq!(envelope.focus_control(), Some("address"));

    envelope.set_focus_control("zip", true);
    assert_eq!(envelope.focus_control(), Some("address_zip"));

    envelope.set_focus_control("contact", false);
    envelope.set_focus_control("phone", true);
    assert_eq!(envelope.focus_control(), Some("contact_phone"));
}

#[test]
fn given_event_verbs_when_deriving_event_id_then_naive_past_tense() {
    let id = |verb: &str| ResultEnvelope::builder().event_verb(verb).build().event_id();

    assert_eq!(id("create"), "created");
    assert_eq!(id("close"), "closed");
    assert_eq!(id("update"), "updated");
    assert_eq!(id("post"), "posted");
    assert_eq!(id("run"), "runned");
    assert_eq!(id(""), "unknown");
}

#[test]
fn given_operation_without_verb_when_deriving_event_id_then_operation_is_used() {
    let mut envelope = ResultEnvelope::builder().operation("Archive").build();
    assert_eq!(envelope.event_id(), "archived");

    envelope.set_event_verb("delete");
    assert_eq!(envelope.event_id(), "deleted");
}

#[test]
fn given_failed_child_when_merging_with_alt_then_child_notes_are_copied() {
    let mut child = ResultEnvelope::builder().prefix("child: ").build();
    child.add_error("a").add_warning("b");
    let mut parent = ResultEnvelope::builder().prefix("parent: ").build();

    parent.merge_with_alt(&child, "should not appear");

    assert_eq!(parent.log().len(), 2);
    assert_eq!(parent.messages(), &["child: a", "child: b"]);
}

#[test]
fn given_successful_child_when_merging_with_alt_then_one_alt_error_is_added() {
    for status in [Status::Ok, Status::Valid] {
        let mut child = ResultEnvelope::builder().status(status).build();
        child.add_info("fine");
        let mut parent = ResultEnvelope::new();

        parent.merge_with_alt(&child, format!("no {} to process", "items"));

        assert_eq!(parent.messages(), &["no items to process"]);
        assert_eq!(parent.log().count_of(NoteKind::Error), 1);
    }
}

#[test]
fn given_successful_child_and_empty_alt_when_merging_with_alt_then_nothing_changes() {
    let mut child = ResultEnvelope::builder().status(Status::Ok).build();
    child.add_info("fine");
    let mut parent = ResultEnvelope::new();

    parent.merge_with_alt(&child, "");

    assert!(parent.messages().is_empty());
}

#[test]
fn given_yes_child_when_merging_with_alt_then_notes_are_copied() {
    let mut child = ResultEnvelope::builder().status(Status::Yes).build();
    child.add_info("confirmed");
    let mut parent = ResultEnvelope::new();

    parent.merge_with_alt(&child, "alt");

    assert_eq!(parent.messages(), &["confirmed"]);
}

#[test]
fn given_child_when_appending_then_child_notes_precede_new_message() {
    let mut child = ResultEnvelope::new();
    child.add_error("timeout");

    let mut parent = ResultEnvelope::new();
    parent
        .append_error(&child, "sync failed")
        .append_info(&child, "will retry")
        .append_warning(&child, "stale cache")
        .append_err(&child, std::fmt::Error);

    assert_eq!(
        parent.messages(),
        &[
            "timeout",
            "sync failed",
            "timeout",
            "will retry",
            "timeout",
            "stale cache",
            "timeout",
            "an error occurred when formatting an argument",
        ]
    );
}

#[test]
fn given_merge_when_child_changes_later_then_parent_is_unaffected() {
    let mut child = ResultEnvelope::new();
    child.add_error("first");
    let mut parent = ResultEnvelope::new();

    parent.merge(&child);
    child.add_error("second");

    assert_eq!(parent.messages(), &["first"]);
}

#[test]
fn given_cloned_envelope_when_mutating_copy_then_original_is_unaffected() {
    let mut original = ResultEnvelope::builder().focus_control("form").build();
    original.set_task_id("task-1");

    let mut copy = original.clone();
    copy.set_focus_control("field", true)
        .set_task_id("task-2")
        .add_error("copy only");

    assert_eq!(original.focus_control(), Some("form"));
    assert_eq!(original.task_id.as_deref(), Some("task-1"));
    assert!(original.messages().is_empty());
}

#[test]
fn given_messages_when_converting_to_string_then_joined_by_line_ending() {
    let mut envelope = ResultEnvelope::builder()
        .line_ending(LineEnding::CrLf)
        .build();
    assert_eq!(envelope.messages_to_string(), "");

    envelope.add_info("one");
    assert_eq!(envelope.messages_to_string(), "one");

    envelope.add_info("two");
    assert_eq!(envelope.messages_to_string(), "one\r\ntwo");
}

#[test]
fn given_finish_when_returning_then_status_is_final() {
    fn remove(id: u32) -> ResultEnvelope {
        let mut res = result_envelope!().build();
        if id == 0 {
            res.add_error("id is required");
            return res;
        }
        res.add_success(format!("{id} removed"));
        res.finish(Status::Ok)
    }

    assert!(remove(0).is_error());
    let removed = remove(9);
    assert!(removed.is_ok());
    assert_eq!(removed.operation(), "remove");
    assert_eq!(removed.event_id(), "removed");
}
