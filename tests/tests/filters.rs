use pretty_assertions::assert_eq;
use qbrecord::{
    driver::operation::{Operation, Source},
    Comparison, Conditions, Filter, Model,
};
use serde_json::json;
use tests::{models, DbTest};

#[derive(Debug, Model)]
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

async fn seeded() -> DbTest {
    let mut test = models!(Teacher);

    for (name, subject, salary) in [
        ("Ada", "Math", 52000),
        ("Grace", "Physics", 61000),
        ("Alan", "Math", 9000),
        ("Edsger", "Computing", 75000),
    ] {
        test.db
            .create(Teacher {
                id: None,
                name: name.to_string(),
                subject: Some(subject.to_string()),
                salary: Some(salary),
            })
            .await
            .unwrap();
    }

    test.log().clear();
    test
}

async fn names(test: &mut DbTest, filter: impl Into<Filter>) -> Vec<String> {
    let teachers = test.db.all::<Teacher>(filter).await.unwrap();
    teachers.into_iter().map(|teacher| teacher.name).collect()
}

/// The query string the last operation sent
fn sent(test: &mut DbTest) -> String {
    match test.log().pop_op() {
        Operation::Query(op) => match op.source {
            Source::Query(query) => query,
            other => panic!("expected a query string; got {other:?}"),
        },
        other => panic!("expected Query; got {other:?}"),
    }
}

#[tokio::test]
async fn scalar_equality() {
    let mut test = seeded().await;

    let found = names(&mut test, Conditions::new().eq("subject", "Math")).await;
    assert_eq!(found, ["Ada", "Alan"]);
    assert_eq!(sent(&mut test), "{'7'.EX.'Math'}");
}

#[tokio::test]
async fn entries_are_anded() {
    let mut test = seeded().await;

    let filter = Conditions::new().eq("subject", "Math").eq("name", "Alan");
    assert_eq!(names(&mut test, filter).await, ["Alan"]);
    assert_eq!(sent(&mut test), "{'7'.EX.'Math'}AND{'6'.EX.'Alan'}");
}

#[tokio::test]
async fn list_values_are_ored() {
    let mut test = seeded().await;

    let filter = Conditions::new().one_of("name", ["Ada", "Edsger"]);
    assert_eq!(names(&mut test, filter).await, ["Ada", "Edsger"]);
    assert_eq!(sent(&mut test), "{'6'.EX.'Ada'}OR{'6'.EX.'Edsger'}");
}

#[tokio::test]
async fn comparators_are_anded() {
    let mut test = seeded().await;

    let filter = Conditions::new().compare(
        "salary",
        Comparison::new().op("GT", 10000).op("LT", 70000),
    );
    assert_eq!(names(&mut test, filter).await, ["Ada", "Grace"]);
    assert_eq!(sent(&mut test), "{'8'.GT.'10000'}AND{'8'.LT.'70000'}");
}

#[tokio::test]
async fn any_of_groups() {
    let mut test = seeded().await;

    let filter = Filter::any_of([
        Conditions::new().eq("name", "Grace"),
        Conditions::new().eq("subject", "Computing"),
    ]);
    assert_eq!(names(&mut test, filter).await, ["Grace", "Edsger"]);
    assert_eq!(sent(&mut test), "{'6'.EX.'Grace'}OR{'7'.EX.'Computing'}");
}

#[tokio::test]
async fn raw_string_with_field_names() {
    let mut test = seeded().await;

    let found = names(&mut test, "{'subject'.EX.'Math'}AND{'salary'.GT.'10000'}").await;
    assert_eq!(found, ["Ada"]);
    assert_eq!(sent(&mut test), "{'7'.EX.'Math'}AND{'8'.GT.'10000'}");
}

#[tokio::test]
async fn raw_string_with_fids() {
    let mut test = seeded().await;

    let found = names(&mut test, "{'6'.SW.'a'}").await;
    assert_eq!(found, ["Ada", "Alan"]);
    assert_eq!(sent(&mut test), "{'6'.SW.'a'}");
}

#[tokio::test]
async fn json_filter() {
    let mut test = seeded().await;

    let filter = Filter::try_from(json!({
        "subject": "Math",
        "salary": { "GTE": 9000, "XEX": [52000] }
    }))
    .unwrap();

    assert_eq!(names(&mut test, filter).await, ["Alan"]);
    assert_eq!(
        sent(&mut test),
        "{'7'.EX.'Math'}AND{'8'.GTE.'9000'}AND{'8'.XEX.'52000'}"
    );
}

#[tokio::test]
async fn first_match() {
    let mut test = seeded().await;

    let first = test
        .db
        .first::<Teacher>(Conditions::new().eq("subject", "Math"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.name, "Ada");

    let none = test
        .db
        .first::<Teacher>(Conditions::new().eq("subject", "History"))
        .await
        .unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn unknown_field_never_reaches_driver() {
    let mut test = seeded().await;

    let err = test
        .db
        .all::<Teacher>(Conditions::new().eq("wage", 1))
        .await
        .unwrap_err();
    assert!(err.is_unknown_field());

    let err = test
        .db
        .all::<Teacher>("{'wage'.EX.'1'}")
        .await
        .unwrap_err();
    assert!(err.is_unknown_field());

    assert!(test.log().is_empty());
}

#[tokio::test]
async fn malformed_raw_string() {
    let mut test = seeded().await;

    let err = test
        .db
        .all::<Teacher>("{'6'.EX.'Ada'")
        .await
        .unwrap_err();
    assert!(err.is_malformed_filter());
    assert!(test.log().is_empty());
}
