use serde_json::Value;
use rusoto_dynamodb::AttributeValue;
use std::collections::HashMap;

// convert a json value to the matching DynamoDB attribute
// null -> NULL, bool -> BOOL, number -> N, string -> S, array -> L, object -> M
pub fn build_attr(value: &Value) -> AttributeValue {
    match value {
        Value::Null => build_null_attr(),

        Value::Bool(x) => build_bool_attr(*x),

        // DynamoDB numbers travel as decimal strings
        Value::Number(x) => build_number_attr(x.to_string()),

        Value::String(x) => build_string_attr(x.to_owned()),

        Value::Array(array) => {
            build_list_attr(array.iter().map(build_attr).collect())
        }

        Value::Object(dictionary) => {
            let mut attr_map = HashMap::new();
            for (k, v) in dictionary {
                attr_map.insert(k.to_owned(), build_attr(v));
            }
            build_map_attr(attr_map)
        }
    }
}

fn build_null_attr() -> AttributeValue {
    AttributeValue {
        null: Some(true),
        ..Default::default()
    }
}

fn build_string_attr(text: String) -> AttributeValue {
    AttributeValue {
        s: Some(text),
        ..Default::default()
    }
}

fn build_bool_attr(b: bool) -> AttributeValue {
    AttributeValue {
        bool: Some(b),
        ..Default::default()
    }
}

fn build_number_attr(text: String) -> AttributeValue {
    AttributeValue {
        n: Some(text),
        ..Default::default()
    }
}

fn build_list_attr(list: Vec<AttributeValue>) -> AttributeValue {
    AttributeValue {
        l: Some(list),
        ..Default::default()
    }
}

fn build_map_attr(map: HashMap<String, AttributeValue>) -> AttributeValue {
    AttributeValue {
        m: Some(map),
        ..Default::default()
    }
}
