// Menu 1-3: customer, mechanic and car forms, plus key allocation
mod common;

use common::{ScriptedClient, output, rows, shop};
use mechanic_shop::ShopError;
use mechanic_shop::core::ShopTable;
use mechanic_shop::db::next_id;

#[tokio::test]
async fn test_next_id_on_empty_table() {
    let mut client = ScriptedClient::new().max_key("MAX(id) FROM Customer", None);
    assert_eq!(next_id(&mut client, ShopTable::Customer).await.unwrap(), 1);
}

#[tokio::test]
async fn test_next_id_without_rows() {
    let mut client = ScriptedClient::new();
    assert_eq!(next_id(&mut client, ShopTable::ClosedRequest).await.unwrap(), 1);
    assert_eq!(client.queries, vec!["SELECT MAX(wid) FROM Closed_Request;"]);
}

#[tokio::test]
async fn test_next_id_after_max() {
    let mut client = ScriptedClient::new().max_key("MAX(ownership_id) FROM Owns", Some(41));
    assert_eq!(next_id(&mut client, ShopTable::Owns).await.unwrap(), 42);
}

#[tokio::test]
async fn test_next_id_at_integer_limit() {
    let mut client = ScriptedClient::new().max_key("MAX(id) FROM Customer", Some(i32::MAX));
    let err = next_id(&mut client, ShopTable::Customer).await.unwrap_err();
    assert_eq!(err.to_string(), "no free key left in Customer");
}

#[tokio::test]
async fn test_add_customer_stops_when_keys_run_out() {
    let client = ScriptedClient::new().max_key("MAX(id) FROM Customer", Some(i32::MAX));
    let mut shop = shop(client, &["Ada", "Lovelace", "5551234", "12 Main St"]);

    assert!(matches!(shop.add_customer().await, Err(ShopError::Validation(_))));
    assert!(shop.client().executed.is_empty());
}

#[tokio::test]
async fn test_add_customer_inserts_row() {
    let client = ScriptedClient::new()
        .max_key("MAX(id) FROM Customer", Some(3))
        .on(
            "FROM Customer WHERE id = 4",
            rows(
                &["id", "fname", "lname", "phone", "address"],
                vec![vec!["4", "Ada", "Lovelace", "5551234", "12 Main St"]],
            ),
        );
    let mut shop = shop(client, &["Ada", "Lovelace", "5551234", "12 Main St"]);

    let customer = shop.add_customer().await.unwrap();
    assert_eq!(customer.id, 4);
    assert_eq!(customer.full_name(), "Ada Lovelace");
    assert_eq!(
        shop.client().executed,
        vec!["INSERT INTO Customer VALUES (4, 'Ada', 'Lovelace', '5551234', '12 Main St');"]
    );

    let out = output(&shop);
    assert!(out.contains("Customer Ada Lovelace has been added with id 4."));
    assert!(out.contains("id\tfname\tlname\tphone\taddress\t\n4\tAda\tLovelace\t5551234\t12 Main St\t\n"));
}

#[tokio::test]
async fn test_add_customer_escapes_quotes() {
    let client = ScriptedClient::new().max_key("MAX(id) FROM Customer", None);
    let mut shop = shop(client, &["Sean", "O'Brien", "555", "1 Baker's Row"]);

    shop.add_customer().await.unwrap();
    assert_eq!(
        shop.client().executed,
        vec!["INSERT INTO Customer VALUES (1, 'Sean', 'O''Brien', '555', '1 Baker''s Row');"]
    );
}

#[tokio::test]
async fn test_add_customer_rejects_long_name_before_insert() {
    let long_name = "A".repeat(33);
    let mut shop = shop(ScriptedClient::new(), &[long_name.as_str(), "Smith", "555", "here"]);

    let err = shop.add_customer().await.unwrap_err();
    assert_eq!(err.to_string(), "First name must be 32 characters or less!");
    assert!(shop.client().executed.is_empty());
}

#[tokio::test]
async fn test_add_customer_rejects_long_phone() {
    let mut shop = shop(ScriptedClient::new(), &["Ann", "Lee", "12345678901234", "here"]);

    let err = shop.add_customer().await.unwrap_err();
    assert!(matches!(err, ShopError::Validation(_)));
    assert!(shop.client().executed.is_empty());
}

#[tokio::test]
async fn test_add_mechanic_inserts_row() {
    let client = ScriptedClient::new().max_key("MAX(id) FROM Mechanic", Some(9));
    let mut shop = shop(client, &["Bob", "Wrench", " 12 "]);

    let mechanic = shop.add_mechanic().await.unwrap();
    assert_eq!(mechanic.id, 10);
    assert_eq!(mechanic.experience, 12);
    assert_eq!(
        shop.client().executed,
        vec!["INSERT INTO Mechanic VALUES (10, 'Bob', 'Wrench', 12);"]
    );
    assert!(output(&shop).contains("Mechanic Bob Wrench has been added with id 10."));
    assert!(shop.client().queries.iter().any(|q| q == "SELECT * FROM Mechanic WHERE id = 10;"));
}

#[tokio::test]
async fn test_add_mechanic_rejects_three_digit_experience() {
    let mut shop = shop(ScriptedClient::new(), &["Bob", "Wrench", "100"]);

    let err = shop.add_mechanic().await.unwrap_err();
    assert_eq!(err.to_string(), "max years of experience is 99!");
    assert!(shop.client().executed.is_empty());
}

#[tokio::test]
async fn test_add_car_for_inserts_car_and_ownership() {
    let client = ScriptedClient::new().max_key("MAX(ownership_id) FROM Owns", Some(7));
    let mut shop = shop(client, &["ABCDEF1234567890", "Honda", "Civic", "2005"]);

    let car = shop.add_car_for(2).await.unwrap();
    assert_eq!(car.vin, "ABCDEF1234567890");
    assert_eq!(
        shop.client().executed,
        vec![
            "INSERT INTO Car VALUES ('ABCDEF1234567890', 'Honda', 'Civic', 2005);",
            "INSERT INTO Owns VALUES (8, 2, 'ABCDEF1234567890');",
        ]
    );

    let queries = &shop.client().queries;
    assert!(queries.iter().any(|q| q == "SELECT * FROM Owns WHERE ownership_id = 8;"));
    assert!(queries.iter().any(|q| q == "SELECT * FROM Car WHERE vin = 'ABCDEF1234567890';"));
    assert!(output(&shop).contains("Successfully added new Honda Civic"));
}

#[tokio::test]
async fn test_add_car_rejects_short_vin() {
    let mut shop = shop(ScriptedClient::new(), &["ABC123", "Honda", "Civic", "2005"]);

    let err = shop.add_car_for(2).await.unwrap_err();
    assert_eq!(err.to_string(), "VIN must be exactly 16 characters!");
    assert!(shop.client().executed.is_empty());
}

#[tokio::test]
async fn test_add_car_rejects_old_year() {
    let mut shop = shop(ScriptedClient::new(), &["ABCDEF1234567890", "Ford", "Model T", "1927"]);

    let err = shop.add_car_for(2).await.unwrap_err();
    assert!(matches!(err, ShopError::Validation(_)));
    assert!(shop.client().executed.is_empty());
}

#[tokio::test]
async fn test_add_car_resolves_owner_first() {
    let client = ScriptedClient::new()
        .on(
            "WHERE lname = 'Smith'",
            common::customers(vec![vec!["2", "John", "Smith"]]),
        )
        .max_key("MAX(ownership_id) FROM Owns", None);
    let mut shop = shop(client, &["Smith", "y", "ABCDEF1234567890", "Honda", "Civic", "2005"]);

    shop.add_car().await.unwrap();
    assert_eq!(
        shop.client().executed_containing("INSERT INTO Owns"),
        vec!["INSERT INTO Owns VALUES (1, 2, 'ABCDEF1234567890');"]
    );
}
