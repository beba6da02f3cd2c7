mod signed_url;
