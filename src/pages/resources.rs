//! Static resource descriptors for the CRUD screens.
//!
//! One table per backend resource; the shared `ResourcePage` renders all
//! of them. Kinds are the closed `FieldKind` set — adding a field kind is
//! a compile-time change, not a new stringly-typed shape.

use crate::pages::resource::{
    ColumnDescriptor, FieldDescriptor, FieldKind, ResourceDescriptor, SelectOption,
};

pub static FIELDS_RESOURCE: ResourceDescriptor = ResourceDescriptor {
    name: "Fields",
    endpoint: "/crops/fields/",
    columns: &[
        ColumnDescriptor {
            key: "name",
            header: "Name",
        },
        ColumnDescriptor {
            key: "location_description",
            header: "Location/Description",
        },
    ],
    form_fields: &[
        FieldDescriptor {
            name: "name",
            label: "Field Name",
            kind: FieldKind::Text,
            required: true,
            admin_only: false,
            placeholder: "e.g., North Field",
            initial: "",
        },
        FieldDescriptor {
            name: "location_description",
            label: "Location/Description",
            kind: FieldKind::TextArea,
            required: false,
            admin_only: false,
            placeholder: "Describe the field location or any notes",
            initial: "",
        },
    ],
    can_create: true,
};

pub static CROPS_RESOURCE: ResourceDescriptor = ResourceDescriptor {
    name: "Crops",
    endpoint: "/crops/crops/",
    columns: &[
        ColumnDescriptor {
            key: "name",
            header: "Crop Name",
        },
        ColumnDescriptor {
            key: "field.name",
            header: "Field",
        },
        ColumnDescriptor {
            key: "planting_date",
            header: "Planting Date",
        },
        ColumnDescriptor {
            key: "expected_harvest_date",
            header: "Expected Harvest",
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
        },
    ],
    form_fields: &[
        FieldDescriptor {
            name: "name",
            label: "Crop Name",
            kind: FieldKind::Text,
            required: true,
            admin_only: false,
            placeholder: "e.g., Maize, Beans",
            initial: "",
        },
        FieldDescriptor {
            name: "field_id",
            label: "Field",
            kind: FieldKind::RelatedRef {
                endpoint: "/crops/fields/",
                label_key: "name",
            },
            required: true,
            admin_only: false,
            placeholder: "Select Field",
            initial: "",
        },
        FieldDescriptor {
            name: "planting_date",
            label: "Planting Date",
            kind: FieldKind::Date,
            required: true,
            admin_only: false,
            placeholder: "",
            initial: "",
        },
        FieldDescriptor {
            name: "expected_harvest_date",
            label: "Expected Harvest Date",
            kind: FieldKind::Date,
            required: true,
            admin_only: false,
            placeholder: "",
            initial: "",
        },
        FieldDescriptor {
            name: "status",
            label: "Status",
            kind: FieldKind::Select {
                options: &[
                    SelectOption {
                        value: "planted",
                        label: "Planted",
                    },
                    SelectOption {
                        value: "growing",
                        label: "Growing",
                    },
                    SelectOption {
                        value: "harvested",
                        label: "Harvested",
                    },
                ],
            },
            required: true,
            admin_only: false,
            placeholder: "Select Status",
            initial: "planted",
        },
    ],
    can_create: true,
};

pub static TASKS_RESOURCE: ResourceDescriptor = ResourceDescriptor {
    name: "Tasks",
    endpoint: "/tasks/tasks/",
    columns: &[
        ColumnDescriptor {
            key: "title",
            header: "Title",
        },
        ColumnDescriptor {
            key: "assigned_to.username",
            header: "Assigned To",
        },
        ColumnDescriptor {
            key: "due_date",
            header: "Due Date",
        },
        ColumnDescriptor {
            key: "status",
            header: "Status",
        },
    ],
    form_fields: &[
        FieldDescriptor {
            name: "title",
            label: "Task Title",
            kind: FieldKind::Text,
            required: true,
            admin_only: false,
            placeholder: "e.g., Water the tomatoes",
            initial: "",
        },
        FieldDescriptor {
            name: "description",
            label: "Description",
            kind: FieldKind::TextArea,
            required: false,
            admin_only: false,
            placeholder: "Detailed instructions for the task",
            initial: "",
        },
        FieldDescriptor {
            name: "assigned_to_id",
            label: "Assign To",
            kind: FieldKind::RelatedRef {
                endpoint: "/auth/users/",
                label_key: "username",
            },
            required: false,
            admin_only: true,
            placeholder: "Select User (Optional)",
            initial: "",
        },
        FieldDescriptor {
            name: "due_date",
            label: "Due Date",
            kind: FieldKind::Date,
            required: true,
            admin_only: false,
            placeholder: "",
            initial: "",
        },
        FieldDescriptor {
            name: "status",
            label: "Status",
            kind: FieldKind::Select {
                options: &[
                    SelectOption {
                        value: "todo",
                        label: "To Do",
                    },
                    SelectOption {
                        value: "in_progress",
                        label: "In Progress",
                    },
                    SelectOption {
                        value: "done",
                        label: "Done",
                    },
                ],
            },
            required: true,
            admin_only: false,
            placeholder: "Select Status",
            initial: "todo",
        },
    ],
    can_create: true,
};

pub static INCOMES_RESOURCE: ResourceDescriptor = ResourceDescriptor {
    name: "Incomes",
    endpoint: "/finance/incomes/",
    columns: &[
        ColumnDescriptor {
            key: "source",
            header: "Source",
        },
        ColumnDescriptor {
            key: "amount",
            header: "Amount",
        },
        ColumnDescriptor {
            key: "date_received",
            header: "Date Received",
        },
    ],
    form_fields: &[
        FieldDescriptor {
            name: "source",
            label: "Source of Income",
            kind: FieldKind::Text,
            required: true,
            admin_only: false,
            placeholder: "e.g., Crop Sale - Maize",
            initial: "",
        },
        FieldDescriptor {
            name: "amount",
            label: "Amount",
            kind: FieldKind::Number,
            required: true,
            admin_only: false,
            placeholder: "0.00",
            initial: "",
        },
        FieldDescriptor {
            name: "date_received",
            label: "Date Received",
            kind: FieldKind::Date,
            required: true,
            admin_only: false,
            placeholder: "",
            initial: "",
        },
    ],
    can_create: true,
};

pub static EXPENSES_RESOURCE: ResourceDescriptor = ResourceDescriptor {
    name: "Expenses",
    endpoint: "/finance/expenses/",
    columns: &[
        ColumnDescriptor {
            key: "category",
            header: "Category",
        },
        ColumnDescriptor {
            key: "amount",
            header: "Amount",
        },
        ColumnDescriptor {
            key: "date_spent",
            header: "Date Spent",
        },
        ColumnDescriptor {
            key: "notes",
            header: "Notes",
        },
    ],
    form_fields: &[
        FieldDescriptor {
            name: "category",
            label: "Expense Category",
            kind: FieldKind::Text,
            required: true,
            admin_only: false,
            placeholder: "e.g., Seeds, Fertilizer, Labor",
            initial: "",
        },
        FieldDescriptor {
            name: "amount",
            label: "Amount",
            kind: FieldKind::Number,
            required: true,
            admin_only: false,
            placeholder: "0.00",
            initial: "",
        },
        FieldDescriptor {
            name: "date_spent",
            label: "Date Spent",
            kind: FieldKind::Date,
            required: true,
            admin_only: false,
            placeholder: "",
            initial: "",
        },
        FieldDescriptor {
            name: "notes",
            label: "Notes",
            kind: FieldKind::TextArea,
            required: false,
            admin_only: false,
            placeholder: "Any additional details about the expense",
            initial: "",
        },
    ],
    can_create: true,
};

pub static INVENTORY_RESOURCE: ResourceDescriptor = ResourceDescriptor {
    name: "Inventory Items",
    endpoint: "/inventory/items/",
    columns: &[
        ColumnDescriptor {
            key: "name",
            header: "Item Name",
        },
        ColumnDescriptor {
            key: "category",
            header: "Category",
        },
        ColumnDescriptor {
            key: "quantity",
            header: "Quantity",
        },
        ColumnDescriptor {
            key: "unit",
            header: "Unit",
        },
    ],
    form_fields: &[
        FieldDescriptor {
            name: "name",
            label: "Item Name",
            kind: FieldKind::Text,
            required: true,
            admin_only: false,
            placeholder: "e.g., Urea Fertilizer",
            initial: "",
        },
        FieldDescriptor {
            name: "category",
            label: "Category",
            kind: FieldKind::Select {
                options: &[
                    SelectOption {
                        value: "seeds",
                        label: "Seeds",
                    },
                    SelectOption {
                        value: "fertilizer",
                        label: "Fertilizer",
                    },
                    SelectOption {
                        value: "pesticide",
                        label: "Pesticide",
                    },
                    SelectOption {
                        value: "equipment",
                        label: "Equipment",
                    },
                    SelectOption {
                        value: "fuel",
                        label: "Fuel",
                    },
                    SelectOption {
                        value: "other",
                        label: "Other",
                    },
                ],
            },
            required: true,
            admin_only: false,
            placeholder: "Select a category",
            initial: "other",
        },
        FieldDescriptor {
            name: "quantity",
            label: "Quantity",
            kind: FieldKind::Number,
            required: true,
            admin_only: false,
            placeholder: "0.00",
            initial: "",
        },
        FieldDescriptor {
            name: "unit",
            label: "Unit",
            kind: FieldKind::Select {
                options: &[
                    SelectOption {
                        value: "kg",
                        label: "Kilograms (kg)",
                    },
                    SelectOption {
                        value: "g",
                        label: "Grams (g)",
                    },
                    SelectOption {
                        value: "liters",
                        label: "Liters",
                    },
                    SelectOption {
                        value: "ml",
                        label: "Milliliters (ml)",
                    },
                    SelectOption {
                        value: "units",
                        label: "Units",
                    },
                    SelectOption {
                        value: "sacks",
                        label: "Sacks",
                    },
                ],
            },
            required: true,
            admin_only: false,
            placeholder: "Select a unit",
            initial: "units",
        },
    ],
    can_create: true,
};

/// Admin user directory; list-only, accounts are created via registration.
pub static USERS_RESOURCE: ResourceDescriptor = ResourceDescriptor {
    name: "Users",
    endpoint: "/auth/users/",
    columns: &[
        ColumnDescriptor {
            key: "id",
            header: "ID",
        },
        ColumnDescriptor {
            key: "username",
            header: "Username",
        },
        ColumnDescriptor {
            key: "email",
            header: "Email",
        },
        ColumnDescriptor {
            key: "role",
            header: "Role",
        },
    ],
    form_fields: &[],
    can_create: false,
};
