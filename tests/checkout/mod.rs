mod checkout_into_empty_directory;
