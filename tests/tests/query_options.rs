use pretty_assertions::assert_eq;
use qbrecord::{driver::operation::Operation, Conditions, Model, QueryOptions};
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

    for (name, salary) in [("Ada", 52000), ("Grace", 61000), ("Alan", 9000)] {
        test.db
            .create(Teacher {
                id: None,
                name: name.to_string(),
                subject: Some("Math".to_string()),
                salary: Some(salary),
            })
            .await
            .unwrap();
    }

    test.log().clear();
    test
}

#[tokio::test]
async fn options_resolve_names_to_fids() {
    let mut test = seeded().await;

    let options = QueryOptions::new()
        .clist("id.name")
        .slist("salary")
        .options("sortorder-D");

    let teachers = test
        .db
        .all_with::<Teacher>(Conditions::new(), &options)
        .await
        .unwrap();

    assert_eq!(
        teachers.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        ["Grace", "Ada", "Alan"]
    );

    // Fields left out of the clist are not loaded
    assert!(teachers.iter().all(|t| t.salary.is_none() && t.subject.is_none()));

    let Operation::Query(op) = test.log().pop_op() else {
        panic!("expected Query");
    };
    assert_eq!(op.clist, "3.6");
    assert_eq!(op.slist.as_deref(), Some("8"));
    assert_eq!(op.options.as_deref(), Some("sortorder-D"));
}

#[tokio::test]
async fn paging() {
    let mut test = seeded().await;

    let options = QueryOptions::new().slist("name").options("num-2.skp-1");
    let teachers = test
        .db
        .all_with::<Teacher>(Conditions::new(), &options)
        .await
        .unwrap();

    assert_eq!(
        teachers.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        ["Alan", "Grace"]
    );

    let Operation::Query(op) = test.log().pop_op() else {
        panic!("expected Query");
    };
    // Without a clist every declared field is requested
    assert_eq!(op.clist, "3.6.7.8");
}

#[tokio::test]
async fn unknown_option_field() {
    let mut test = seeded().await;

    let options = QueryOptions::new().slist("wage");
    let err = test
        .db
        .all_with::<Teacher>(Conditions::new(), &options)
        .await
        .unwrap_err();

    assert!(err.is_unknown_field());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn required_fields_are_always_fetched() {
    let mut test = seeded().await;

    // `name` cannot load from null, so it is fetched even though the clist
    // leaves it out
    let options = QueryOptions::new().clist("id.subject");
    let teachers = test
        .db
        .all_with::<Teacher>(Conditions::new(), &options)
        .await
        .unwrap();

    assert_eq!(
        teachers.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        ["Ada", "Grace", "Alan"]
    );
    assert!(teachers.iter().all(|t| t.salary.is_none()));
    assert_eq!(teachers[0].subject.as_deref(), Some("Math"));

    let Operation::Query(op) = test.log().pop_op() else {
        panic!("expected Query");
    };
    assert_eq!(op.clist, "3.7.6");
}

#[test]
fn derived_required_fields() {
    assert!(Teacher::is_required("name"));
    assert!(!Teacher::is_required("id"));
    assert!(!Teacher::is_required("salary"));
    assert!(!Teacher::is_required("wage"));
}
