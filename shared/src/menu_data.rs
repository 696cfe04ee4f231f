//! Default Menu Data
//!
//! Hardcoded seed content for stations that have never been edited.
//! First read of a missing document persists a copy of this menu, so
//! a fresh deployment serves real content immediately.

use crate::models::{MenuItem, MenuSection};

fn item(name: &str, desc: Option<&str>, price: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        desc: desc.map(str::to_string),
        price: price.to_string(),
    }
}

fn section(id: &str, title: &str, chunk_size: u32, items: Vec<MenuItem>) -> MenuSection {
    MenuSection {
        id: id.to_string(),
        title: title.to_string(),
        chunk_size,
        items,
    }
}

/// The seed menu, in display order.
pub fn default_sections() -> Vec<MenuSection> {
    vec![
        section(
            "cafeteria",
            "Cafetería",
            6,
            vec![
                item("Café jarrito +2 facturas", None, "$5.000"),
                item("Café jarrito +3 facturas", None, "$6.000"),
                item("Café c/leche +2 facturas", None, "$5.900"),
                item("Café c/leche +3 facturas", None, "$6.900"),
                item("Tazón café c/leche +2 facturas", None, "$6.200"),
                item("Tazón café c/leche +3 facturas", None, "$7.300"),
            ],
        ),
        section(
            "cafes",
            "Cafés",
            3,
            vec![
                item("Capuccino", None, "$4.000"),
                item("Submarino", None, "$4.200"),
                item("Latte Vainilla", None, "$5.000"),
                item("Latte Caramel", None, "$5.000"),
                item("Cafe Chico", None, "$2.800"),
                item("Cafe Jarrito", None, "$3.100"),
                item("Café con leche", None, "$4.100"),
                item("Tazon Cafe Con Leche", None, "$4.500"),
            ],
        ),
        section(
            "panaderia",
            "Panadería",
            3,
            vec![
                item("Budín porción", Some("con cafe"), "$7.200"),
                item("Alfajor", Some("con cafe"), "$5.200"),
                item("Muffin simple", Some("con cafe"), "$6.800"),
                item("Muffin relleno", Some("con cafe"), "$6.800"),
                item("Chesscake", Some("con cafe"), "$8.700"),
                item("Croissant de jamón y queso", Some("Sin cafe"), "$7.500"),
                item("Trenzado de lomito y queso", Some("Sin cafe"), "$6.900"),
                item("Tostado", Some("Sin cafe"), "$6.800"),
            ],
        ),
        section(
            "comidas",
            "Comidas • Combos + bebida",
            6,
            vec![
                item(
                    "Milanesa napolitana",
                    Some("Con papas rusticas y gaseosa"),
                    "$11.750",
                ),
                item("Pechuga de pollo", Some("Con arroz y gaseosa"), "$11.750"),
                item("Lasagna", Some("Con gaseosa"), "$11.750"),
                item("Risotto de calabaza", Some("Con gaseosa"), "$10.950"),
                item(
                    "Carré de cerdo",
                    Some("Con puré de batatas y gaseosa"),
                    "$11.750",
                ),
                item(
                    "Albóndigas portuguesas",
                    Some("Con arroz y gaseosa"),
                    "$11.750",
                ),
                item("Roll Veggie", Some("Con gaseosa"), "$11.000"),
                item("Roll Jamón y Queso", Some("Con gaseosa"), "$11.000"),
                item("Roll Pollo", Some("Con gaseosa"), "$11.000"),
                item("Roll Peceto", Some("Con gaseosa"), "$11.000"),
                item(
                    "Hamburguesa con queso",
                    Some("Con papas y gaseosa"),
                    "$11.500",
                ),
                item("Hamburguesa doble", Some("Con papas"), "$12.800"),
                item("Ciabatta jamón y queso", None, "$10.050"),
                item("Ciabatta multicereal", None, "$9.750"),
                item(
                    "Sándwich de milanesa",
                    Some("Con papas y gaseosa"),
                    "$14.000",
                ),
            ],
        ),
        section(
            "hamburguesas",
            "Hamburguesas",
            3,
            vec![
                item(
                    "Hamburguesa magna",
                    Some("Palta, panceta y cheddar"),
                    "$15.400",
                ),
                item(
                    "Hamburguesa de campo",
                    Some("Panceta, Cheddar y salsa chipotle"),
                    "$14.900",
                ),
                item(
                    "Gran Hamburguesa",
                    Some("Panceta, huevo, cheddar y salsa BBQ"),
                    "$14.900",
                ),
                item(
                    "Doble queso y huevo",
                    Some("Cheddar, huevo, tomate y lechuga"),
                    "$13.600",
                ),
                item(
                    "Doble y triple max",
                    Some("Salsa picante, cheddar y jalapeños"),
                    "$14.900/$15.700",
                ),
                item("Not Chicken Crispy", Some("Barbacoa o palta"), "$14.850"),
                item(
                    "Hamburguesa con queso",
                    Some("Con papas y gaseosa"),
                    "$11.500",
                ),
                item("Hamburguesa doble", Some("Con papas"), "$12.800"),
            ],
        ),
        section(
            "hamburguesapollo",
            "Hamburguesas de pollo",
            6,
            vec![
                item(
                    "Hamburguesa Deluxe",
                    Some("Palta, panceta y cheddar"),
                    "$11.300",
                ),
                item(
                    "Hamburguesa Simple",
                    Some("Lechuga tomate y cheddar"),
                    "$10.300",
                ),
            ],
        ),
        section(
            "ensaladas",
            "Ensaladas",
            6,
            vec![
                item(
                    "Ensalada Caesar",
                    Some("Pechuga grille, panceta y parmesano"),
                    "$11.500",
                ),
                item(
                    "Ensalada Chef",
                    Some("Lechuga criolla y morada, jamon cocido, queso y huevo duro"),
                    "$11.500",
                ),
            ],
        ),
        section(
            "bebidas",
            "Bebidas frías",
            3,
            vec![
                item("Agua 500ml", None, "$2.450"),
                item("Gaseosa 600ml", None, "$2.200"),
                item("Jugo exprimido", None, "$5.000"),
                item("Monster 473ml", None, "$4.370"),
                item("Red Bull 250ml", None, "$4.600"),
            ],
        ),
    ]
}
