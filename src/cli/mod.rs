//! Interactive menu over the repository.
//!
//! The loop prints a numbered menu, reads typed field values from standard
//! input, and invokes repository operations. Storage failures are printed
//! and the loop continues; a value that does not parse as its expected type
//! aborts the program.

mod prompt;

use crate::db::repo::{Repository, RowOutcome, StoreDeleteOutcome};
use crate::domain::{Store, Vehicle};
use prompt::{read_f64, read_i64, read_line, read_text};

const MENU: &str = "\n--- Lot Management ---\n\
1. Add vehicle\n\
2. Add store\n\
3. Update vehicle\n\
4. Update store\n\
5. List vehicles\n\
6. List stores\n\
7. List vehicles of a store\n\
8. Delete vehicle\n\
9. Delete store\n\
0. Quit";

/// Run the menu loop until the user quits or input closes.
pub async fn run(repo: &Repository) -> anyhow::Result<()> {
    loop {
        println!("{MENU}");
        let Some(choice) = read_line("Select an option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => add_vehicle(repo).await?,
            "2" => add_store(repo).await?,
            "3" => update_vehicle(repo).await?,
            "4" => update_store(repo).await?,
            "5" => list_vehicles(repo).await,
            "6" => list_stores(repo).await,
            "7" => list_store_vehicles(repo).await?,
            "8" => delete_vehicle(repo).await?,
            "9" => delete_store(repo).await?,
            "0" => {
                println!("Bye.");
                return Ok(());
            }
            _ => println!("Invalid option, try again."),
        }
    }
}

fn read_vehicle_fields(code_label: &str) -> anyhow::Result<Vehicle> {
    Ok(Vehicle {
        code: read_i64(code_label)?,
        brand: read_text("Brand: ")?,
        model: read_text("Model: ")?,
        year: read_i64("Year of manufacture: ")?,
        store_id: read_i64("Store id: ")?,
        price: read_f64("Price: ")?,
        condition: read_text("Condition (NEW | SEMI_NEW | USED | DAMAGED): ")?,
    })
}

async fn add_vehicle(repo: &Repository) -> anyhow::Result<()> {
    let vehicle = read_vehicle_fields("Vehicle code: ")?;

    match repo.create_vehicle(&vehicle).await {
        Ok(created) => {
            if let Some(err) = created.invalid_condition {
                println!("{err}; price stored as entered.");
            }
            println!("Vehicle registered at {:.2}.", created.stored_price);
        }
        Err(err) => println!("Could not register vehicle: {err}"),
    }
    Ok(())
}

async fn add_store(repo: &Repository) -> anyhow::Result<()> {
    let store = Store {
        code: read_i64("Store code: ")?,
        name: read_text("Name: ")?,
        address: read_text("Address: ")?,
    };

    match repo.create_store(&store).await {
        Ok(()) => println!("Store registered."),
        Err(err) => println!("Could not register store: {err}"),
    }
    Ok(())
}

async fn update_vehicle(repo: &Repository) -> anyhow::Result<()> {
    let vehicle = read_vehicle_fields("Code of the vehicle to update: ")?;

    match repo.update_vehicle(&vehicle).await {
        Ok(RowOutcome::Applied) => println!("Vehicle {} updated.", vehicle.code),
        Ok(RowOutcome::NotFound) => println!("No vehicle with code {}.", vehicle.code),
        Err(err) => println!("Could not update vehicle: {err}"),
    }
    Ok(())
}

async fn update_store(repo: &Repository) -> anyhow::Result<()> {
    let store = Store {
        code: read_i64("Code of the store to update: ")?,
        name: read_text("New name: ")?,
        address: read_text("New address: ")?,
    };

    match repo.update_store(&store).await {
        Ok(RowOutcome::Applied) => println!("Store {} updated.", store.code),
        Ok(RowOutcome::NotFound) => println!("No store with code {}.", store.code),
        Err(err) => println!("Could not update store: {err}"),
    }
    Ok(())
}

async fn list_vehicles(repo: &Repository) {
    match repo.read_all_vehicles().await {
        Ok(vehicles) if vehicles.is_empty() => println!("No vehicles registered."),
        Ok(vehicles) => {
            for vehicle in vehicles {
                println!("{vehicle}\n");
            }
        }
        Err(err) => println!("Could not list vehicles: {err}"),
    }
}

async fn list_stores(repo: &Repository) {
    match repo.read_all_stores().await {
        Ok(stores) if stores.is_empty() => println!("No stores registered."),
        Ok(stores) => {
            for store in stores {
                println!("{store}\n");
            }
        }
        Err(err) => println!("Could not list stores: {err}"),
    }
}

async fn list_store_vehicles(repo: &Repository) -> anyhow::Result<()> {
    let store_id = read_i64("Store id: ")?;

    match repo.read_vehicles_by_store(store_id).await {
        Ok(vehicles) if vehicles.is_empty() => {
            println!("No vehicles for store {store_id}.");
        }
        Ok(vehicles) => {
            for vehicle in vehicles {
                println!("{vehicle}\n");
            }
        }
        Err(err) => println!("Could not list vehicles: {err}"),
    }
    Ok(())
}

async fn delete_vehicle(repo: &Repository) -> anyhow::Result<()> {
    let code = read_i64("Code of the vehicle to delete: ")?;

    match repo.delete_vehicle(code).await {
        Ok(RowOutcome::Applied) => println!("Vehicle {code} deleted."),
        Ok(RowOutcome::NotFound) => println!("No vehicle with code {code}."),
        Err(err) => println!("Could not delete vehicle: {err}"),
    }
    Ok(())
}

async fn delete_store(repo: &Repository) -> anyhow::Result<()> {
    let code = read_i64("Code of the store to delete (a store should have no vehicles left): ")?;

    match repo.delete_store(code).await {
        Ok(StoreDeleteOutcome::Deleted) => println!("Store {code} deleted."),
        Ok(StoreDeleteOutcome::NotFound) => println!("No store with code {code}."),
        Ok(StoreDeleteOutcome::HasVehicles(n)) => {
            println!("Store {code} still has {n} vehicle(s); move or delete them first.");
        }
        Err(err) => println!("Could not delete store: {err}"),
    }
    Ok(())
}
