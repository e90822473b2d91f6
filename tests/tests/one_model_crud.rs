use pretty_assertions::assert_eq;
use qbrecord::{driver::operation::Operation, row, schema::Fid, Model};
use serde_json::json;
use tests::models;

#[derive(Debug, PartialEq, Model)]
#[table = "bjzrx8cjn"]
struct Teacher {
    #[fid(3)]
    #[key]
    #[read_only]
    id: Option<i64>,

    #[fid(6)]
    name: String,

    #[fid(7)]
    subject: Option<String>,

    #[fid(8)]
    salary: Option<i64>,
}

fn teacher(name: &str, subject: &str, salary: i64) -> Teacher {
    Teacher {
        id: None,
        name: name.to_string(),
        subject: Some(subject.to_string()),
        salary: Some(salary),
    }
}

#[tokio::test]
async fn create_assigns_record_id() {
    let mut test = models!(Teacher);

    let ada = test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    assert_eq!(ada.id, Some(1));

    let Operation::AddRecord(op) = test.log().pop_op() else {
        panic!("expected AddRecord");
    };
    assert_eq!(op.table, "bjzrx8cjn");
    assert_eq!(
        op.payload.into_iter().collect::<Vec<_>>(),
        [
            (Fid(6), json!("Ada")),
            (Fid(7), json!("Math")),
            (Fid(8), json!(52000)),
        ]
    );

    let grace = test.db.create(teacher("Grace", "Physics", 61000)).await.unwrap();
    assert_eq!(grace.id, Some(2));
}

#[tokio::test]
async fn create_rejects_saved_record() {
    let mut test = models!(Teacher);

    let mut ada = teacher("Ada", "Math", 52000);
    ada.id = Some(7);

    let err = test.db.create(ada).await.unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "invalid argument: cannot create a record that already has record id 7"
    );
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn find_by_primary_key() {
    let mut test = models!(Teacher);
    test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    test.db.create(teacher("Grace", "Physics", 61000)).await.unwrap();
    test.log().clear();

    let found = test.db.find::<Teacher>(2).await.unwrap().unwrap();
    assert_eq!(
        found,
        Teacher {
            id: Some(2),
            ..teacher("Grace", "Physics", 61000)
        }
    );

    let Operation::Query(op) = test.log().pop_op() else {
        panic!("expected Query");
    };
    assert_eq!(
        op.source,
        qbrecord::driver::operation::Source::Query("{'3'.EX.'2'}".into())
    );
    assert_eq!(op.clist, "3.6.7.8");
    assert_eq!(op.options.as_deref(), Some("num-1"));

    assert!(test.db.find::<Teacher>(42).await.unwrap().is_none());
}

#[tokio::test]
async fn unset_fields_load_as_none() {
    let test = models!(Teacher);

    let created = test
        .db
        .create(Teacher {
            id: None,
            name: "Alan".to_string(),
            subject: None,
            salary: None,
        })
        .await
        .unwrap();

    let found = test.db.find::<Teacher>(created.id.unwrap()).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn save_edits_by_record_id() {
    let mut test = models!(Teacher);
    let mut ada = test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    test.log().clear();

    ada.salary = Some(58000);
    test.db.save(&mut ada).await.unwrap();

    let Operation::EditRecord(op) = test.log().pop_op() else {
        panic!("expected EditRecord");
    };
    assert_eq!(op.record_id, 1);
    // The key is written because it is set; the driver ignores FID 3
    assert_eq!(op.payload.get(&Fid(3)), Some(&json!(1)));
    assert_eq!(op.payload.get(&Fid(8)), Some(&json!(58000)));

    let found = test.db.find::<Teacher>(1).await.unwrap().unwrap();
    assert_eq!(found.salary, Some(58000));
}

#[tokio::test]
async fn save_fails_when_record_is_gone() {
    let test = models!(Teacher);
    let mut ada = test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    test.db.delete(&ada).await.unwrap();

    ada.salary = Some(1);
    let err = test.db.save(&mut ada).await.unwrap_err();
    assert_eq!(err.to_string(), "record 1 on `bjzrx8cjn` was not updated");
}

#[tokio::test]
async fn update_attributes() {
    let mut test = models!(Teacher);
    let mut ada = test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    test.log().clear();

    let updated = test
        .db
        .update_attributes(&mut ada, row! { "subject" => "Logic", "salary" => 60000 })
        .await
        .unwrap();
    assert!(updated);
    assert_eq!(ada.subject.as_deref(), Some("Logic"));
    assert_eq!(ada.salary, Some(60000));
    assert!(matches!(test.log().pop_op(), Operation::EditRecord(_)));

    let found = test.db.find::<Teacher>(1).await.unwrap().unwrap();
    assert_eq!(found, ada);
}

#[tokio::test]
async fn update_attributes_with_nothing_to_update() {
    let mut test = models!(Teacher);
    let mut ada = test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    test.log().clear();

    let updated = test.db.update_attributes(&mut ada, row! {}).await.unwrap();
    assert!(!updated);
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn update_attributes_rejects_bad_input() {
    let mut test = models!(Teacher);
    let mut ada = test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    test.log().clear();

    let err = test
        .db
        .update_attributes(&mut ada, row! { "wage" => 1 })
        .await
        .unwrap_err();
    assert!(err.is_unknown_field());
    assert_eq!(err.to_string(), "unknown field `wage` on `bjzrx8cjn`");

    let err = test
        .db
        .update_attributes(&mut ada, row! { "salary" => "lots" })
        .await
        .unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "field `salary`: cannot convert String to i64");

    assert!(test.log().is_empty());
}

#[tokio::test]
async fn assign_attributes_without_saving() {
    let mut test = models!(Teacher);
    let mut ada = teacher("Ada", "Math", 52000);
    test.log().clear();

    ada.assign_attributes(row! { "name" => "Ada Lovelace" }).unwrap();
    assert_eq!(ada.name, "Ada Lovelace");
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn delete_returns_record_id() {
    let mut test = models!(Teacher);
    let ada = test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    test.log().clear();

    assert_eq!(test.db.delete(&ada).await.unwrap(), Some(1));

    let Operation::DeleteRecord(op) = test.log().pop_op() else {
        panic!("expected DeleteRecord");
    };
    assert_eq!(op.record_id, 1);

    // Already gone
    assert_eq!(test.db.delete(&ada).await.unwrap(), None);
    assert!(test.db.find::<Teacher>(1).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_unsaved_record() {
    let mut test = models!(Teacher);

    let deleted = test.db.delete(&teacher("Ada", "Math", 52000)).await.unwrap();
    assert_eq!(deleted, None);
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn purge_matching_records() {
    let test = models!(Teacher);
    test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    test.db.create(teacher("Grace", "Physics", 61000)).await.unwrap();
    test.db.create(teacher("Alan", "Math", 9000)).await.unwrap();

    let purged = test.db.purge::<Teacher>(qbrecord::Filter::eq("subject", "Math")).await.unwrap();
    assert_eq!(purged, 2);

    let remaining = test.db.all::<Teacher>(qbrecord::Conditions::new()).await.unwrap();
    assert_eq!(
        remaining.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        ["Grace"]
    );
}

#[tokio::test]
async fn saved_reports_fail_on_memory_driver() {
    let mut test = models!(Teacher);

    let err = test.db.qid::<Teacher>(12).await.unwrap_err();
    assert!(err.is_driver());
    assert_eq!(
        err.to_string(),
        "driver operation on `bjzrx8cjn` failed: saved reports cannot be run in memory; qid=12"
    );

    let op = test.log().pop();
    assert!(matches!(
        op.operation,
        Operation::Query(ref query) if query.source == qbrecord::driver::operation::Source::Qid(12)
    ));
    assert!(op.response.is_err());
}

#[tokio::test]
async fn purge_needs_a_filter() {
    let mut test = models!(Teacher);
    test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    test.log().clear();

    let err = test
        .db
        .purge::<Teacher>(qbrecord::Conditions::new())
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let err = test
        .db
        .purge::<Teacher>(qbrecord::Filter::any_of([]))
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    assert!(test.log().is_empty());
    assert!(test.db.find::<Teacher>(1).await.unwrap().is_some());
}

#[tokio::test]
async fn purge_all_empties_the_table() {
    let mut test = models!(Teacher);
    test.db.create(teacher("Ada", "Math", 52000)).await.unwrap();
    test.db.create(teacher("Grace", "Physics", 61000)).await.unwrap();
    test.log().clear();

    assert_eq!(test.db.purge_all::<Teacher>().await.unwrap(), 2);

    let Operation::PurgeRecords(op) = test.log().pop_op() else {
        panic!("expected PurgeRecords");
    };
    assert_eq!(op.source, qbrecord::driver::operation::Source::All);
}
