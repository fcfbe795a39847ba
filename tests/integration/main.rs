
#[cfg(test)]
mod assert_record_exists;
#[cfg(test)]
mod is_enabled;
