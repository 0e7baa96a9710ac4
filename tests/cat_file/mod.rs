mod cat_file_follows_names;
