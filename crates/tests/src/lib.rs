
#[cfg(test)]
mod content_list_tests;

#[cfg(test)]
mod content_get_tests;

#[cfg(test)]
mod content_delete_tests;

#[cfg(test)]
mod request_header_tests;

#[cfg(test)]
mod auth_sign_in_tests;

#[cfg(test)]
mod auth_sign_up_tests;

#[cfg(test)]
mod auth_sign_out_tests;

#[cfg(test)]
mod role_lookup_tests;
