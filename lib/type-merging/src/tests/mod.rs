mod canonical;
mod fields;
mod testkit;
mod validation;

use crate::candidates::collect_type_candidates;
use crate::merger::TypeMerger;
use crate::schema::print_types;
use crate::tests::testkit::{init_logger, subgraph};

#[test]
fn merges_every_type_of_two_subgraphs() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let sources = vec![
        subgraph(
            "accounts",
            r#"
            type Query {
              me: User
            }

            type User @canonical {
              id: ID!
              name: String
            }

            enum Role {
              ADMIN
              USER
            }
            "#,
        ),
        subgraph(
            "reviews",
            r#"
            type Query {
              topReviews(first: Int): [Review]
            }

            type Review {
              id: ID!
              body: String
              author: User
            }

            type User {
              id: ID!
              reviews: [Review]
            }

            enum Role {
              ADMIN
              GUEST
            }
            "#,
        ),
    ];

    let merged = TypeMerger::default().merge_all(&collect_type_candidates(&sources))?;

    insta::assert_snapshot!(print_types(merged.values()), @r###"
    type Query {
      me: User
      topReviews(first: Int): [Review]
    }

    type User {
      id: ID!
      reviews: [Review]
      name: String
    }

    enum Role {
      ADMIN
      USER
      GUEST
    }

    type Review {
      id: ID!
      body: String
      author: User
    }
    "###);

    Ok(())
}

#[test]
fn merge_all_stops_at_the_first_failing_type() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User { id: ID! } scalar Cursor"),
        subgraph("b", "interface User { id: ID! } enum Cursor { FIRST }"),
    ];

    let err = TypeMerger::default()
        .merge_all(&collect_type_candidates(&sources))
        .expect_err("User cannot be merged");

    assert_eq!(err.coordinate(), Some("User"));
}
