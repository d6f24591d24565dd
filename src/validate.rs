use serde_json::Value;

/// Checks that a decoded value has the shape of a Login Widget record:
/// numeric `id`, string `first_name`, numeric `auth_date`, string
/// `hash`.
pub fn is_login_widget_data(value: &Value) -> bool {
    let Some(data) = value.as_object() else {
        return false;
    };
    data.get("id").is_some_and(Value::is_number)
        && data.get("first_name").is_some_and(Value::is_string)
        && data.get("auth_date").is_some_and(Value::is_number)
        && data.get("hash").is_some_and(Value::is_string)
}

/// Checks that a decoded value has the shape of parsed Mini App init
/// data: numeric `auth_date`, string `hash`, and a well-formed `user`
/// object when present.
pub fn is_init_data(value: &Value) -> bool {
    let Some(data) = value.as_object() else {
        return false;
    };
    if !(data.get("auth_date").is_some_and(Value::is_number)
        && data.get("hash").is_some_and(Value::is_string))
    {
        return false;
    }
    match data.get("user") {
        None => true,
        Some(user) => user.as_object().is_some_and(|user| {
            user.get("id").is_some_and(Value::is_number)
                && user.get("first_name").is_some_and(Value::is_string)
        }),
    }
}
