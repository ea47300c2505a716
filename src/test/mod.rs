mod ddg;
