use jiff::civil::Date;
use pretty_assertions::assert_eq;
use qbrecord::{
    driver::operation::Operation,
    schema::{Field, FieldKind},
    Model, Record, Result, Row, TableSchema, Value,
};
use std::sync::{Arc, OnceLock};
use tests::models;

/// A model whose primary key is a domain field rather than the record id
#[derive(Debug, Model)]
#[table = "bjzrx9abc"]
struct Classroom {
    #[fid(3)]
    record_id: Option<i64>,

    #[fid(6)]
    #[key]
    code: String,

    #[fid(7)]
    subject: Option<String>,

    #[fid(1)]
    date_created: Option<Date>,
}

/// No `#[key]`; the record id is the primary key
#[derive(Debug, Model)]
#[table = "bjzrxbook"]
struct Book {
    #[fid(3)]
    id: Option<i64>,

    #[fid(6)]
    title: String,
}

fn classroom(code: &str, subject: &str) -> Classroom {
    Classroom {
        record_id: None,
        code: code.to_string(),
        subject: Some(subject.to_string()),
        date_created: None,
    }
}

#[test]
fn derived_schema() {
    let schema = Classroom::schema();

    assert_eq!(schema.table_id(), "bjzrx9abc");
    assert_eq!(schema.primary_key().name, "code");
    assert_eq!(schema.record_id_field().map(|f| f.name.as_str()), Some("record_id"));
    assert_eq!(schema.clist(), "3.6.7.1");
    assert_eq!(schema.resolve("date_created").unwrap().kind, FieldKind::Date);
    assert!(schema.resolve("date_created").unwrap().read_only);

    // Built once
    assert!(std::ptr::eq(Classroom::schema(), schema));

    assert_eq!(Book::schema().primary_key().name, "id");
}

#[tokio::test]
async fn find_by_domain_key() {
    let mut test = models!(Classroom);
    test.db.create(classroom("C-101", "Math")).await.unwrap();
    test.db.create(classroom("C-102", "Physics")).await.unwrap();
    test.log().clear();

    let found = test.db.find::<Classroom>("C-102").await.unwrap().unwrap();
    assert_eq!(found.record_id, Some(2));
    assert_eq!(found.subject.as_deref(), Some("Physics"));

    let Operation::Query(op) = test.log().pop_op() else {
        panic!("expected Query");
    };
    assert_eq!(
        op.source,
        qbrecord::driver::operation::Source::Query("{'6'.EX.'C-102'}".into())
    );
}

#[tokio::test]
async fn key_is_written_and_edits_use_record_id() {
    let mut test = models!(Classroom);
    let mut room = test.db.create(classroom("C-101", "Math")).await.unwrap();
    assert_eq!(room.record_id, Some(1));

    let Operation::AddRecord(op) = test.log().pop_op() else {
        panic!("expected AddRecord");
    };
    assert_eq!(
        op.payload.keys().map(|fid| fid.0).collect::<Vec<_>>(),
        [6, 7]
    );

    room.subject = Some("Logic".to_string());
    test.db.save(&mut room).await.unwrap();

    let Operation::EditRecord(op) = test.log().pop_op() else {
        panic!("expected EditRecord");
    };
    assert_eq!(op.record_id, 1);
    // The record id is not the key, so it is never written
    assert_eq!(
        op.payload.keys().map(|fid| fid.0).collect::<Vec<_>>(),
        [6, 7]
    );
}

#[tokio::test]
async fn date_created_is_decoded() {
    let test = models!(Classroom);
    test.db.create(classroom("C-101", "Math")).await.unwrap();

    let today = jiff::Zoned::now().date();
    let found = test.db.find::<Classroom>("C-101").await.unwrap().unwrap();

    assert_eq!(found.date_created, Some(today));
}

#[tokio::test]
async fn implicit_record_id_key() {
    let test = models!(Book);

    let book = test
        .db
        .create(Book {
            id: None,
            title: "Notes on the Analytical Engine".to_string(),
        })
        .await
        .unwrap();

    let found = test.db.find::<Book>(book.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.title, "Notes on the Analytical Engine");
}

/// Keyed by a domain field with no record id column
#[derive(Debug)]
struct Course {
    code: String,
    title: Option<String>,
}

impl Record for Course {
    fn field_value(&self, name: &str) -> Value {
        match name {
            "code" => Value::from(&self.code),
            "title" => self.title.as_deref().map(Value::from).unwrap_or_default(),
            _ => Value::Null,
        }
    }
}

impl Model for Course {
    fn schema() -> &'static Arc<TableSchema> {
        static SCHEMA: OnceLock<Arc<TableSchema>> = OnceLock::new();

        SCHEMA.get_or_init(|| {
            let schema = TableSchema::builder("bjzrxcrse")
                .field(Field::new("code", 6, FieldKind::String).primary_key())
                .string("title", 7)
                .build()
                .unwrap();
            Arc::new(schema)
        })
    }

    fn load(mut row: Row) -> Result<Self> {
        Ok(Course {
            code: qbrecord::Primitive::load(row.take("code"))?,
            title: qbrecord::Primitive::load(row.take("title"))?,
        })
    }

    fn assign(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "code" => self.code = qbrecord::Primitive::load(value)?,
            "title" => self.title = qbrecord::Primitive::load(value)?,
            _ => return Err(qbrecord::Error::unknown_field("bjzrxcrse", name)),
        }

        Ok(())
    }
}

#[tokio::test]
async fn save_requires_record_id_field() {
    let mut test = models!(Course);

    let mut course = Course {
        code: "C-1".to_string(),
        title: Some("Math".to_string()),
    };

    let err = test.db.save(&mut course).await.unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "invalid argument: cannot save records of `bjzrxcrse` without a record id field (FID 3)"
    );

    let err = test.db.create(course).await.unwrap_err();
    assert!(err.is_invalid_argument());

    // Nothing was added, so no duplicate can appear
    assert!(test.log().is_empty());
}
